// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical ledger record

use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};

/// Whether value left or reached the queried account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// `Out` iff `from` is the queried account, compared case-insensitively
    ///
    /// ```
    /// use semioledger::Direction;
    ///
    /// assert_eq!(Direction::classify("0xABCD", "0xabcd"), Direction::Out);
    /// assert_eq!(Direction::classify("0x1234", "0xabcd"), Direction::In);
    /// ```
    pub fn classify(from: &str, queried: &str) -> Self {
        if from.trim().eq_ignore_ascii_case(queried.trim()) {
            Direction::Out
        } else {
            Direction::In
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset moved by a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The chain's base currency, rendered `NATIVE`
    Native,
    /// A token, by its explorer-reported symbol
    Token(String),
    /// A token whose symbol the explorer left blank, rendered `UNKNOWN`
    Unknown,
}

impl Asset {
    /// Asset for a token transfer, from its raw `tokenSymbol`
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim() {
            "" => Asset::Unknown,
            s => Asset::Token(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Asset::Native => "NATIVE",
            Asset::Token(symbol) => symbol,
            Asset::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One normalized transfer, seen from one queried account
///
/// Entries are only built by [`Normalizer`](crate::Normalizer), which
/// guarantees a strictly positive amount and lower-cased addresses. They are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    timestamp: i64,
    direction: Direction,
    asset: Asset,
    amount: BigDecimal,
    from: String,
    to: String,
    hash: String,
    link: String,
}

impl LedgerEntry {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        timestamp: i64,
        direction: Direction,
        asset: Asset,
        amount: BigDecimal,
        from: String,
        to: String,
        hash: String,
        link: String,
    ) -> Self {
        Self {
            timestamp,
            direction,
            asset,
            amount,
            from,
            to,
            hash,
            link,
        }
    }

    /// Seconds since epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Display amount, always greater than zero
    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Explorer page for the transaction
    pub fn link(&self) -> &str {
        &self.link
    }
}
