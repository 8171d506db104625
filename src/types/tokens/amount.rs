// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type and decimal conversion

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, Zero};

use super::decimals::TokenDecimals;

/// Raw token amount (not normalized for decimals)
///
/// This is the integer an explorer reports in the `value` field, in the
/// smallest unit of the asset (wei for ETH, 10^-6 for USDC). Use
/// [`normalize`](Self::normalize) to get the display amount.
///
/// # Examples
///
/// ```
/// use semioledger::{TokenAmount, TokenDecimals};
///
/// let raw = TokenAmount::parse_lenient("1500000");
/// assert_eq!(raw.normalize(TokenDecimals::USDC).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Parse a base-10 integer string, yielding zero for anything malformed
    ///
    /// Empty strings, signs, fractions, hex and values above 2^256 - 1 all map
    /// to [`TokenAmount::ZERO`] so the record is dropped by the zero filter.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Self::ZERO;
        }
        U256::from_str_radix(trimmed, 10)
            .map(Self)
            .unwrap_or_else(|e| {
                tracing::debug!(raw = %trimmed, error = %e, "Unparseable amount, using 0");
                Self::ZERO
            })
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// The division is done on the decimal string, so the result is exact for
    /// any precision, including ones where 10^decimals does not fit in a U256.
    pub fn normalize(&self, decimals: TokenDecimals) -> BigDecimal {
        let digits = self.0.to_string();
        let scale = decimals.as_u8() as usize;

        let literal = if scale == 0 {
            digits
        } else {
            let padded = format!("{digits:0>width$}", width = scale + 1);
            let (whole, fractional) = padded.split_at(padded.len() - scale);
            format!("{whole}.{fractional}")
        };

        BigDecimal::from_str(&literal)
            .map(|value| value.normalized())
            .unwrap_or_else(|e| {
                tracing::warn!(
                    amount = %self.0,
                    error = %e,
                    "Failed to convert token amount to decimal, using 0"
                );
                BigDecimal::zero()
            })
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a raw integer string into a display amount
///
/// Malformed input converts to zero instead of failing.
///
/// ```
/// use semioledger::{to_decimal, TokenDecimals};
/// use bigdecimal::BigDecimal;
///
/// assert_eq!(to_decimal("1000000000000000000", TokenDecimals::STANDARD), BigDecimal::from(1));
/// assert_eq!(to_decimal("not a number", TokenDecimals::STANDARD), BigDecimal::from(0));
/// ```
pub fn to_decimal(raw_integer: &str, decimals: TokenDecimals) -> BigDecimal {
    TokenAmount::parse_lenient(raw_integer).normalize(decimals)
}
