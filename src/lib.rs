// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # semioledger
//!
//! Unified transaction ledger for a set of blockchain accounts, built from an
//! Etherscan-compatible block explorer API.
//!
//! For every valid account the ledger pulls two listings, native-asset
//! transfers and token-transfer events, normalizes each record to a common
//! [`LedgerEntry`] and merges everything into one list ordered by timestamp,
//! most recent first.
//!
//! ## Pipeline
//!
//! 1. **Validation** - candidates must be `0x` followed by 40 hex characters
//!    ([`valid_addresses`]).
//! 2. **Retrieval** - a [`TransactionSource`] lists raw records per account.
//!    [`ExplorerClient`] is the HTTP implementation; its calls are paced by a
//!    [`transport::MinDelayLayer`].
//! 3. **Normalization** - amounts are scaled by their decimal precision, zero
//!    values dropped and direction classified ([`Normalizer`]).
//! 4. **Merge** - all batches are combined and stably sorted ([`merge()`]).
//!
//! A failed fetch contributes an empty batch; the run carries on.
//!
//! ## Example
//!
//! ```rust,no_run
//! use semioledger::{ExplorerClient, LedgerConfig, LedgerPipeline, Normalizer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LedgerConfig::from_env()?;
//! let client = ExplorerClient::new(&config)?;
//! let pipeline = LedgerPipeline::new(client, Normalizer::new(&config.base_explorer_url));
//!
//! for entry in pipeline.build(["0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"]).await? {
//!     println!("{} {} {} {}", entry.timestamp(), entry.direction(), entry.asset(), entry.amount());
//! }
//! # Ok(())
//! # }
//! ```

mod address;
pub mod bootstrap;
mod config;
mod errors;
mod explorer;
mod merge;
mod normalize;
mod pipeline;
mod sink;
mod spans;
pub mod transport;
mod types;

pub use address::{is_valid_address, valid_addresses};
pub use config::{constants, ApiKey, LedgerConfig, LedgerConfigBuilder};
pub use errors::{ConfigError, FetchError, LedgerError, SinkError};
pub use explorer::{Envelope, ExplorerClient, ExplorerRequest, HttpService};
pub use merge::merge;
pub use normalize::Normalizer;
pub use pipeline::{LedgerPipeline, TransactionSource};
pub use sink::{
    format_timestamp, JsonLinesSink, LedgerRow, LedgerSink, TsvSink, COLUMNS,
};
pub use types::{
    entry::{Asset, Direction, LedgerEntry},
    raw::{RawNativeTransfer, RawTokenTransfer, RawTransfer, TransferKind},
    tokens::{to_decimal, TokenAmount, TokenDecimals},
};
