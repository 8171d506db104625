// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Merging per-account batches into one ordered ledger

use std::cmp::Reverse;

use crate::types::entry::LedgerEntry;

/// Flatten batches and order them most recent first
///
/// The sort is stable: entries with equal timestamps keep the order in which
/// they were flattened.
pub fn merge<I>(batches: I) -> Vec<LedgerEntry>
where
    I: IntoIterator<Item = Vec<LedgerEntry>>,
{
    let mut ledger: Vec<LedgerEntry> = batches.into_iter().flatten().collect();
    ledger.sort_by_key(|entry| Reverse(entry.timestamp()));
    ledger
}
