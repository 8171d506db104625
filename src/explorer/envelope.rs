// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Explorer response envelope
//!
//! Etherscan-compatible APIs wrap every answer as
//! `{"status": "1", "message": "OK", "result": [...]}`. Failures keep HTTP 200
//! and report `status = "0"` with a string `result`; an account with no
//! history is also `status = "0"`, with message `No transactions found`.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{errors::FetchError, types::raw::TransferKind};

/// Message explorers use for an empty (but successful) listing
const NO_TRANSACTIONS: &str = "No transactions found";

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl Envelope {
    /// Decode the listing, skipping individual records that do not deserialize
    pub fn into_records<T: DeserializeOwned>(self, kind: TransferKind) -> Result<Vec<T>, FetchError> {
        match self.result {
            Value::Array(items) => {
                let total = items.len();
                let records: Vec<T> = items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        serde_json::from_value(item)
                            .map_err(|e| debug!(%kind, index, error = %e, "Skipping malformed record"))
                            .ok()
                    })
                    .collect();

                if records.len() < total {
                    warn!(%kind, skipped = total - records.len(), total, "Explorer page had malformed records");
                }
                Ok(records)
            }
            _ if self.message.starts_with(NO_TRANSACTIONS) => Ok(Vec::new()),
            Value::String(detail) => Err(FetchError::explorer(self.message, detail)),
            other => Err(FetchError::explorer(self.message, other.to_string())),
        }
    }
}
