// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

/// Fixed-point precision of an on-chain amount
///
/// Native transfers always use 18 decimals. Token transfers carry their own
/// precision in the explorer's `tokenDecimal` field, which is missing or garbage
/// often enough that [`parse_or_default`](Self::parse_or_default) falls back to
/// [`STANDARD`](Self::STANDARD).
///
/// # Examples
///
/// ```
/// use semioledger::TokenDecimals;
///
/// assert_eq!(TokenDecimals::parse_or_default("6"), TokenDecimals::new(6));
/// assert_eq!(TokenDecimals::parse_or_default(""), TokenDecimals::STANDARD);
/// assert_eq!(TokenDecimals::parse_or_default("n/a"), TokenDecimals::STANDARD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Precision of the chain's native asset, and the fallback for tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Parse an explorer `tokenDecimal` string, defaulting to 18
    ///
    /// Anything that is not a non-negative integer in `0..=255` is treated as
    /// missing. `"0"` is a real precision and is kept.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.trim()
            .parse::<u8>()
            .map(Self)
            .unwrap_or(Self::STANDARD)
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
