//! Error types for the semioledger library.
//!
//! Each stage has its own error type. [`LedgerError`] wraps the fatal ones
//! for callers that only need to know a run failed:
//!
//! - [`ConfigError`] - bad configuration or no valid addresses; fatal
//! - [`FetchError`] - one explorer call failed; recovered as an empty batch
//!   by the pipeline, so it is not part of `LedgerError`
//! - [`SinkError`] - the ledger could not be written out; fatal
//!
//! Malformed records are not errors at all. They degrade to zero-value
//! records that normalization drops.
//!
//! # Examples
//!
//! ```rust,ignore
//! use semioledger::{ConfigError, LedgerError, LedgerPipeline};
//!
//! match pipeline.build(&addresses).await {
//!     Ok(ledger) => println!("{} entries", ledger.len()),
//!     Err(LedgerError::Config(ConfigError::NoValidAddresses { candidates })) => {
//!         eprintln!("None of the {candidates} configured addresses are valid");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod config;
mod fetch;
mod sink;

pub use config::ConfigError;
pub use fetch::FetchError;
pub use sink::SinkError;

/// Unified error type for semioledger operations.
///
/// All stage-specific errors convert into `LedgerError` via `From`, so `?`
/// works across stages.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output error.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}
