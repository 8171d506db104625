// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the ledger pipeline.
//!
//! - Raw explorer records for native and token transfers
//! - The canonical [`LedgerEntry`](entry::LedgerEntry) and its parts
//! - Token amounts and decimal precision

pub mod entry;
pub mod raw;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
