// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for semioledger integration tests
//!
//! Provides a mock [`TransactionSource`] so the pipeline can be exercised
//! without talking to a real explorer.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use semioledger::{
    FetchError, RawNativeTransfer, RawTokenTransfer, TransactionSource, TransferKind,
};

pub const ALICE: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const BOB: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
#[allow(dead_code)]
pub const CAROL: &str = "0xcccccccccccccccccccccccccccccccccccccccc";

/// Canned answer for one (address, kind) listing
enum Canned<T> {
    Records(Vec<T>),
    Failure(String),
}

/// Mock TransactionSource with per-address answers
///
/// Unknown addresses get an empty listing. Every call is recorded in order.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockTransactionSource::new()
///     .with_native(ALICE, vec![native_transfer(ALICE, BOB, "1", 100, "0x01")])
///     .with_token_failure(BOB, "Max rate limit reached");
/// ```
#[derive(Default)]
pub struct MockTransactionSource {
    native: HashMap<String, Canned<RawNativeTransfer>>,
    token: HashMap<String, Canned<RawTokenTransfer>>,
    calls: Mutex<Vec<(String, TransferKind)>>,
}

#[allow(dead_code)]
impl MockTransactionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_native(mut self, address: &str, records: Vec<RawNativeTransfer>) -> Self {
        self.native
            .insert(address.to_string(), Canned::Records(records));
        self
    }

    pub fn with_token(mut self, address: &str, records: Vec<RawTokenTransfer>) -> Self {
        self.token
            .insert(address.to_string(), Canned::Records(records));
        self
    }

    pub fn with_native_failure(mut self, address: &str, detail: &str) -> Self {
        self.native
            .insert(address.to_string(), Canned::Failure(detail.to_string()));
        self
    }

    pub fn with_token_failure(mut self, address: &str, detail: &str) -> Self {
        self.token
            .insert(address.to_string(), Canned::Failure(detail.to_string()));
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<(String, TransferKind)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, address: &str, kind: TransferKind) {
        self.calls
            .lock()
            .unwrap()
            .push((address.to_string(), kind));
    }
}

fn answer<T: Clone>(
    canned: &HashMap<String, Canned<T>>,
    address: &str,
) -> Result<Vec<T>, FetchError> {
    match canned.get(address) {
        Some(Canned::Records(records)) => Ok(records.clone()),
        Some(Canned::Failure(detail)) => Err(FetchError::explorer("NOTOK", detail.as_str())),
        None => Ok(Vec::new()),
    }
}

#[async_trait]
impl TransactionSource for MockTransactionSource {
    async fn fetch_native(&self, address: &str) -> Result<Vec<RawNativeTransfer>, FetchError> {
        self.record(address, TransferKind::Native);
        answer(&self.native, address)
    }

    async fn fetch_token(&self, address: &str) -> Result<Vec<RawTokenTransfer>, FetchError> {
        self.record(address, TransferKind::Token);
        answer(&self.token, address)
    }
}

/// Helper to create a native transfer record
#[allow(dead_code)]
pub fn native_transfer(
    from: &str,
    to: &str,
    wei: &str,
    timestamp: i64,
    hash: &str,
) -> RawNativeTransfer {
    RawNativeTransfer {
        time_stamp: timestamp.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: wei.to_string(),
        hash: hash.to_string(),
    }
}

/// Helper to create a token transfer record
#[allow(dead_code)]
pub fn token_transfer(
    from: &str,
    to: &str,
    raw_value: &str,
    symbol: &str,
    decimals: u8,
    timestamp: i64,
    hash: &str,
) -> RawTokenTransfer {
    RawTokenTransfer {
        time_stamp: timestamp.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: raw_value.to_string(),
        hash: hash.to_string(),
        token_symbol: symbol.to_string(),
        token_decimal: decimals.to_string(),
    }
}
