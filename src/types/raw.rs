// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw explorer records
//!
//! Etherscan-compatible explorers return both transfer classes as JSON objects
//! with string fields. Every field defaults when absent and accepts a bare
//! number or `null` in place of a string, so one sloppy record never fails the
//! page it arrived in. Bad values are dealt with during normalization.

use serde::{Deserialize, Deserializer, Serialize};

/// Native-asset transfer as returned by the `txlist` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNativeTransfer {
    /// Seconds since epoch, as a decimal string
    #[serde(default, deserialize_with = "lenient_string")]
    pub time_stamp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub from: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: String,
    /// Integer amount in wei
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hash: String,
}

/// Token-transfer event as returned by the `tokentx` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenTransfer {
    /// Seconds since epoch, as a decimal string
    #[serde(default, deserialize_with = "lenient_string")]
    pub time_stamp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub from: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: String,
    /// Integer amount in the token's smallest unit
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hash: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_symbol: String,
    /// Token precision; blank or non-numeric means 18
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_decimal: String,
}

/// Either raw record shape, tagged at the fetch boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTransfer {
    Native(RawNativeTransfer),
    Token(RawTokenTransfer),
}

impl RawTransfer {
    /// Which transfer class this record belongs to
    pub fn kind(&self) -> TransferKind {
        match self {
            RawTransfer::Native(_) => TransferKind::Native,
            RawTransfer::Token(_) => TransferKind::Token,
        }
    }
}

impl From<RawNativeTransfer> for RawTransfer {
    fn from(raw: RawNativeTransfer) -> Self {
        RawTransfer::Native(raw)
    }
}

impl From<RawTokenTransfer> for RawTransfer {
    fn from(raw: RawTokenTransfer) -> Self {
        RawTransfer::Token(raw)
    }
}

/// The two transaction classes fetched per account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    Native,
    Token,
}

impl TransferKind {
    /// Explorer `action` parameter that lists this class
    pub const fn explorer_action(self) -> &'static str {
        match self {
            TransferKind::Native => "txlist",
            TransferKind::Token => "tokentx",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TransferKind::Native => "native",
            TransferKind::Token => "token",
        }
    }
}

impl std::fmt::Display for TransferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_from_explorer_json() {
        let json = r#"{
            "blockNumber": "14923678",
            "timeStamp": "1654646411",
            "hash": "0xabc",
            "from": "0xAAAA",
            "to": "0xbbbb",
            "value": "1000000000000000000",
            "isError": "0"
        }"#;
        let raw: RawNativeTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(raw.time_stamp, "1654646411");
        assert_eq!(raw.from, "0xAAAA");
        assert_eq!(raw.value, "1000000000000000000");
        assert_eq!(raw.hash, "0xabc");
    }

    #[test]
    fn test_token_from_explorer_json() {
        let json = r#"{
            "timeStamp": "1654646411",
            "hash": "0xdef",
            "from": "0xaaaa",
            "to": "0xbbbb",
            "value": "500000",
            "tokenName": "USD Coin",
            "tokenSymbol": "USDC",
            "tokenDecimal": "6"
        }"#;
        let raw: RawTokenTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(raw.token_symbol, "USDC");
        assert_eq!(raw.token_decimal, "6");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw: RawTokenTransfer = serde_json::from_str(r#"{"hash": "0x1"}"#).unwrap();
        assert_eq!(raw.hash, "0x1");
        assert!(raw.value.is_empty());
        assert!(raw.token_decimal.is_empty());
    }

    #[test]
    fn test_numbers_and_nulls_are_accepted() {
        let json = r#"{"timeStamp": 1700000000, "value": null, "tokenDecimal": 6}"#;
        let raw: RawTokenTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(raw.time_stamp, "1700000000");
        assert_eq!(raw.value, "");
        assert_eq!(raw.token_decimal, "6");
    }

    #[test]
    fn test_tagged_union_kind() {
        let native: RawTransfer = RawNativeTransfer::default().into();
        let token: RawTransfer = RawTokenTransfer::default().into();
        assert_eq!(native.kind(), TransferKind::Native);
        assert_eq!(token.kind(), TransferKind::Token);
        assert_eq!(TransferKind::Token.explorer_action(), "tokentx");
    }
}
