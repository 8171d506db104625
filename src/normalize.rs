// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalization of raw explorer records into [`LedgerEntry`] values.
//!
//! Both record shapes go through the same steps:
//!
//! 1. Parse the timestamp; an unparseable one makes the record malformed.
//! 2. Convert `value` with the shape's precision (18 for native transfers,
//!    `tokenDecimal` or 18 for tokens). Malformed amounts become zero.
//! 3. Drop the record if the amount is not strictly positive.
//! 4. Lower-case `from`/`to` and classify the direction against the queried
//!    account.
//!
//! None of this can fail: a bad record is dropped and the rest of the batch
//! carries on.

use bigdecimal::{BigDecimal, Zero};
use tracing::debug;

use crate::types::{
    entry::{Asset, Direction, LedgerEntry},
    raw::{RawNativeTransfer, RawTokenTransfer, RawTransfer, TransferKind},
    tokens::{to_decimal, TokenDecimals},
};

/// Maps raw records to ledger entries for one explorer
#[derive(Debug, Clone)]
pub struct Normalizer {
    tx_url_prefix: String,
}

impl Normalizer {
    /// Create a normalizer that links transactions under `base_explorer_url`
    ///
    /// ```
    /// use semioledger::Normalizer;
    ///
    /// let normalizer = Normalizer::new("https://etherscan.io/");
    /// assert_eq!(normalizer.link_for("0xabc"), "https://etherscan.io/tx/0xabc");
    /// ```
    pub fn new(base_explorer_url: &str) -> Self {
        Self {
            tx_url_prefix: format!("{}/tx/", base_explorer_url.trim_end_matches('/')),
        }
    }

    /// Explorer link for a transaction hash
    pub fn link_for(&self, hash: &str) -> String {
        format!("{}{}", self.tx_url_prefix, hash)
    }

    /// Normalize a native transfer; `None` if it carries no value or is malformed
    pub fn normalize_native(
        &self,
        raw: &RawNativeTransfer,
        queried: &str,
    ) -> Option<LedgerEntry> {
        let amount = to_decimal(&raw.value, TokenDecimals::STANDARD);
        self.build(
            TransferKind::Native,
            &raw.time_stamp,
            amount,
            Asset::Native,
            &raw.from,
            &raw.to,
            &raw.hash,
            queried,
        )
    }

    /// Normalize a token transfer; `None` if it carries no value or is malformed
    pub fn normalize_token(&self, raw: &RawTokenTransfer, queried: &str) -> Option<LedgerEntry> {
        let decimals = TokenDecimals::parse_or_default(&raw.token_decimal);
        let amount = to_decimal(&raw.value, decimals);
        self.build(
            TransferKind::Token,
            &raw.time_stamp,
            amount,
            Asset::from_symbol(&raw.token_symbol),
            &raw.from,
            &raw.to,
            &raw.hash,
            queried,
        )
    }

    /// Normalize either record shape
    pub fn normalize(&self, raw: &RawTransfer, queried: &str) -> Option<LedgerEntry> {
        match raw {
            RawTransfer::Native(native) => self.normalize_native(native, queried),
            RawTransfer::Token(token) => self.normalize_token(token, queried),
        }
    }

    /// Normalize a batch, keeping input order and skipping dropped records
    pub fn normalize_batch(&self, raws: &[RawTransfer], queried: &str) -> Vec<LedgerEntry> {
        let entries: Vec<LedgerEntry> = raws
            .iter()
            .filter_map(|raw| self.normalize(raw, queried))
            .collect();

        if entries.len() < raws.len() {
            debug!(
                address = %queried,
                kept = entries.len(),
                dropped = raws.len() - entries.len(),
                "Dropped zero-value or malformed records"
            );
        }

        entries
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        &self,
        kind: TransferKind,
        time_stamp: &str,
        amount: BigDecimal,
        asset: Asset,
        from: &str,
        to: &str,
        hash: &str,
        queried: &str,
    ) -> Option<LedgerEntry> {
        if amount <= BigDecimal::zero() {
            return None;
        }

        let timestamp = match time_stamp.trim().parse::<i64>() {
            Ok(timestamp) => timestamp,
            Err(e) => {
                debug!(%kind, hash = %hash, raw = %time_stamp, error = %e, "Malformed timestamp");
                return None;
            }
        };

        let from = from.trim().to_ascii_lowercase();
        let to = to.trim().to_ascii_lowercase();
        let direction = Direction::classify(&from, queried);
        let hash = hash.trim().to_string();
        let link = self.link_for(&hash);

        Some(LedgerEntry::new(
            timestamp, direction, asset, amount, from, to, hash, link,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const ME: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const THEM: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn normalizer() -> Normalizer {
        Normalizer::new("https://etherscan.io")
    }

    fn native(from: &str, to: &str, value: &str) -> RawNativeTransfer {
        RawNativeTransfer {
            time_stamp: "1700000000".into(),
            from: from.into(),
            to: to.into(),
            value: value.into(),
            hash: "0xfeed".into(),
        }
    }

    fn token(value: &str, symbol: &str, decimals: &str) -> RawTokenTransfer {
        RawTokenTransfer {
            time_stamp: "1700000100".into(),
            from: THEM.into(),
            to: ME.into(),
            value: value.into(),
            hash: "0xbeef".into(),
            token_symbol: symbol.into(),
            token_decimal: decimals.into(),
        }
    }

    #[test]
    fn test_native_outgoing() {
        let mixed_case = ME.to_ascii_uppercase().replacen("0X", "0x", 1);
        let raw = native(&mixed_case, THEM, "2000000000000000000");
        let entry = normalizer().normalize_native(&raw, ME).unwrap();

        assert_eq!(entry.timestamp(), 1_700_000_000);
        assert_eq!(entry.direction(), Direction::Out);
        assert_eq!(entry.asset(), &Asset::Native);
        assert_eq!(entry.amount(), &BigDecimal::from(2));
        assert_eq!(entry.from(), ME);
        assert_eq!(entry.to(), THEM);
        assert_eq!(entry.link(), "https://etherscan.io/tx/0xfeed");
    }

    #[test]
    fn test_native_incoming() {
        let entry = normalizer()
            .normalize_native(&native(THEM, ME, "1"), ME)
            .unwrap();
        assert_eq!(entry.direction(), Direction::In);
        assert_eq!(
            entry.amount(),
            &BigDecimal::from_str("0.000000000000000001").unwrap()
        );
    }

    #[test]
    fn test_direction_ignores_to_field() {
        // A self-transfer is outgoing because `from` matches
        let entry = normalizer()
            .normalize_native(&native(ME, ME, "5"), ME)
            .unwrap();
        assert_eq!(entry.direction(), Direction::Out);
    }

    #[test]
    fn test_zero_and_malformed_native_values_are_dropped() {
        for value in ["0", "000", "", "garbage", "-1"] {
            assert!(
                normalizer()
                    .normalize_native(&native(ME, THEM, value), ME)
                    .is_none(),
                "{value}"
            );
        }
    }

    #[test]
    fn test_token_uses_reported_decimals() {
        let entry = normalizer()
            .normalize_token(&token("500000", "USDC", "6"), ME)
            .unwrap();
        assert_eq!(entry.asset(), &Asset::Token("USDC".into()));
        assert_eq!(entry.amount(), &BigDecimal::from_str("0.5").unwrap());
        assert_eq!(entry.direction(), Direction::In);
    }

    #[test]
    fn test_token_defaults_to_18_decimals() {
        for decimals in ["", "eighteen"] {
            let entry = normalizer()
                .normalize_token(&token("3000000000000000000", "DAI", decimals), ME)
                .unwrap();
            assert_eq!(entry.amount(), &BigDecimal::from(3));
        }
    }

    #[test]
    fn test_token_without_symbol_is_unknown() {
        let entry = normalizer()
            .normalize_token(&token("1", "", "0"), ME)
            .unwrap();
        assert_eq!(entry.asset(), &Asset::Unknown);
        assert_eq!(entry.amount(), &BigDecimal::from(1));
    }

    #[test]
    fn test_malformed_timestamp_is_dropped() {
        let mut raw = native(ME, THEM, "1");
        raw.time_stamp = "yesterday".into();
        assert!(normalizer().normalize_native(&raw, ME).is_none());
    }

    #[test]
    fn test_batch_keeps_order_and_skips_bad_records() {
        let batch = vec![
            RawTransfer::Native(native(ME, THEM, "1")),
            RawTransfer::Native(native(ME, THEM, "0")),
            RawTransfer::Token(token("7", "X", "0")),
        ];
        let entries = normalizer().normalize_batch(&batch, ME);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].asset(), &Asset::Native);
        assert_eq!(entries[1].asset(), &Asset::Token("X".into()));
    }
}
