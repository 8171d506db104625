// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ledger pipeline: validate, fetch, normalize, merge.

use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, info, warn, Instrument};

use crate::{
    address::valid_addresses,
    errors::{ConfigError, FetchError, LedgerError},
    merge::merge,
    normalize::Normalizer,
    spans,
    types::{
        entry::LedgerEntry,
        raw::{RawNativeTransfer, RawTokenTransfer, RawTransfer, TransferKind},
    },
};

/// Where raw transfer records come from
///
/// Implementations own transport concerns, including any pause required
/// between calls. Each method lists one transfer class for one account.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Native-asset transfers involving `address`
    async fn fetch_native(&self, address: &str) -> Result<Vec<RawNativeTransfer>, FetchError>;

    /// Token-transfer events involving `address`
    async fn fetch_token(&self, address: &str) -> Result<Vec<RawTokenTransfer>, FetchError>;
}

/// Builds a unified ledger for a set of accounts
///
/// Accounts are processed one at a time, native transfers before token
/// transfers, each fetch awaited before the next starts. A failed fetch
/// contributes nothing and never stops the run.
pub struct LedgerPipeline<S> {
    source: S,
    normalizer: Normalizer,
}

impl<S: TransactionSource> LedgerPipeline<S> {
    pub fn new(source: S, normalizer: Normalizer) -> Self {
        Self { source, normalizer }
    }

    /// The underlying transaction source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the ledger for `addresses`, most recent entry first
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoValidAddresses`] without fetching anything if
    /// no candidate passes validation.
    pub async fn build<I>(&self, addresses: I) -> Result<Vec<LedgerEntry>, LedgerError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let candidates: Vec<String> = addresses
            .into_iter()
            .map(|address| address.as_ref().to_string())
            .collect();
        let accounts = valid_addresses(&candidates);

        if accounts.is_empty() {
            return Err(ConfigError::NoValidAddresses {
                candidates: candidates.len(),
            }
            .into());
        }

        let ledger = async {
            let mut batches = Vec::with_capacity(accounts.len());
            for account in &accounts {
                batches.push(self.collect_account(account).await);
            }

            let ledger = merge(batches);
            info!(
                accounts = accounts.len(),
                entries = ledger.len(),
                "Ledger built"
            );
            ledger
        }
        .instrument(spans::build_ledger(accounts.len()))
        .await;

        Ok(ledger)
    }

    /// Fetch and normalize both transfer classes for one account
    async fn collect_account(&self, account: &str) -> Vec<LedgerEntry> {
        let native = recover(
            account,
            TransferKind::Native,
            self.source.fetch_native(account),
        )
        .await;
        let token = recover(account, TransferKind::Token, self.source.fetch_token(account)).await;

        let raws: Vec<RawTransfer> = native
            .into_iter()
            .map(RawTransfer::Native)
            .chain(token.into_iter().map(RawTransfer::Token))
            .collect();

        self.normalizer.normalize_batch(&raws, account)
    }
}

/// Await a fetch, turning a failure into an empty batch
async fn recover<T, F>(account: &str, kind: TransferKind, fetch: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, FetchError>>,
{
    match fetch.instrument(spans::fetch_batch(account, kind)).await {
        Ok(records) => {
            debug!(address = %account, %kind, count = records.len(), "Fetched records");
            records
        }
        Err(e) => {
            warn!(
                address = %account,
                %kind,
                error = %e,
                "Fetch failed, continuing with an empty batch"
            );
            Vec::new()
        }
    }
}
