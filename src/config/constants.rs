//! Defaults and environment variable names
//!
//! Centralizes the magic values used to talk to Etherscan-compatible explorers.

use std::time::Duration;

/// Etherscan multichain (v2) API endpoint; the chain is selected by `chainid`
pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/v2/api";

/// Browser URL used when the chain has no known explorer
pub const FALLBACK_EXPLORER_URL: &str = "https://etherscan.io";

/// Minimum pause after each explorer call (free-tier keys allow ~5 req/s)
pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_millis(250);

/// HTTP timeout per explorer call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Records requested per call; explorers cap a single page at 10 000
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

/// Environment variable names read by [`LedgerConfig::from_env`](super::LedgerConfig::from_env)
pub mod env {
    pub const API_KEY: &str = "EXPLORER_API_KEY";
    pub const RATE_LIMIT_DELAY_MS: &str = "RATE_LIMIT_DELAY_MS";
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    pub const CHAIN_ID: &str = "CHAIN_ID";
    pub const API_URL: &str = "EXPLORER_API_URL";
    pub const BASE_URL: &str = "EXPLORER_BASE_URL";
    pub const PAGE_SIZE: &str = "PAGE_SIZE";
    pub const ADDRESSES: &str = "LEDGER_ADDRESSES";
    pub const FORMAT: &str = "LEDGER_FORMAT";
}
