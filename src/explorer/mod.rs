// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan-compatible explorer data source.
//!
//! [`ExplorerClient`] implements [`TransactionSource`](crate::TransactionSource)
//! against the `account` module (`txlist` for native transfers, `tokentx` for
//! token transfers). Each call fetches a single page; there is no pagination
//! beyond the configured page size.

mod client;
mod envelope;

pub use client::{ExplorerClient, ExplorerRequest, HttpService};
pub use envelope::Envelope;
