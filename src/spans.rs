//! Span creation helpers for semioledger operations.
//!
//! Telemetry stays out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and the
//! caller attaches it with [`tracing::Instrument`].
//!
//! ```rust,ignore
//! async { /* work */ }.instrument(spans::build_ledger(accounts.len())).await
//! ```

use tracing::Span;

use crate::types::raw::TransferKind;

/// Create span for building one ledger across all accounts.
///
/// Parent: None (root span for this operation)
/// Children: fetch_batch spans (two per account)
#[inline]
pub(crate) fn build_ledger(accounts: usize) -> Span {
    tracing::info_span!("semioledger.build_ledger", accounts = accounts)
}

/// Create span for one explorer listing of one transfer class.
///
/// Parent: build_ledger span
#[inline]
pub(crate) fn fetch_batch(address: &str, kind: TransferKind) -> Span {
    tracing::debug_span!(
        "semioledger.fetch_batch",
        address = %address,
        kind = %kind,
    )
}
