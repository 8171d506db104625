//! Configuration for semioledger runs
//!
//! Everything the pipeline and explorer client need is carried by one explicit
//! [`LedgerConfig`] value: the API credential, the pause between explorer
//! calls, which chain and explorer to talk to, and page sizing.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use semioledger::LedgerConfig;
//! use std::time::Duration;
//!
//! let config = LedgerConfig::new("my-api-key");
//! assert_eq!(config.rate_limit_delay, Duration::from_millis(250));
//! assert_eq!(config.base_explorer_url, "https://etherscan.io");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use semioledger::LedgerConfigBuilder;
//! use alloy_chains::NamedChain;
//! use std::time::Duration;
//!
//! let config = LedgerConfigBuilder::new("my-api-key")
//!     .chain(NamedChain::Polygon)
//!     .rate_limit_delay(Duration::from_millis(500))
//!     .build();
//! assert_eq!(config.base_explorer_url, "https://polygonscan.com");
//! ```

use std::str::FromStr;
use std::time::Duration;

use alloy_chains::NamedChain;

use crate::errors::ConfigError;

pub mod constants;

use constants::{
    env, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_RATE_LIMIT_DELAY, DEFAULT_REQUEST_TIMEOUT,
    FALLBACK_EXPLORER_URL,
};

/// Explorer API credential
///
/// `Debug` output is redacted so configs can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building requests
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Configuration for a ledger run
///
/// Use [`LedgerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Explorer API key
    pub api_key: ApiKey,

    /// Pause after each explorer call before the next may start
    /// Default: 250ms
    pub rate_limit_delay: Duration,

    /// HTTP timeout per explorer call
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// Chain whose history is fetched, sent as `chainid`
    /// Default: Ethereum mainnet
    pub chain: NamedChain,

    /// Explorer API endpoint
    pub api_url: String,

    /// Explorer browser root used for transaction links, without trailing `/`
    pub base_explorer_url: String,

    /// Records requested per call (single page)
    pub page_size: u32,
}

impl LedgerConfig {
    /// Mainnet configuration with default pacing
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        LedgerConfigBuilder::new(api_key).build()
    }

    /// Load configuration from the environment (and `.env`, if loaded)
    ///
    /// Only `EXPLORER_API_KEY` is required; see [`constants::env`] for the
    /// optional overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = var(env::API_KEY).ok_or(ConfigError::MissingVar { name: env::API_KEY })?;
        let mut builder = LedgerConfigBuilder::new(api_key);

        if let Some(ms) = parse_var::<u64>(env::RATE_LIMIT_DELAY_MS, var(env::RATE_LIMIT_DELAY_MS))? {
            builder = builder.rate_limit_delay(Duration::from_millis(ms));
        }
        if let Some(secs) = parse_var::<u64>(env::REQUEST_TIMEOUT_SECS, var(env::REQUEST_TIMEOUT_SECS))? {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(chain_id) = parse_var::<u64>(env::CHAIN_ID, var(env::CHAIN_ID))? {
            let chain = NamedChain::try_from(chain_id)
                .map_err(|_| ConfigError::UnknownChain { chain_id })?;
            builder = builder.chain(chain);
        }
        if let Some(url) = var(env::API_URL) {
            builder = builder.api_url(url);
        }
        if let Some(url) = var(env::BASE_URL) {
            builder = builder.base_explorer_url(url);
        }
        if let Some(size) = parse_var::<u32>(env::PAGE_SIZE, var(env::PAGE_SIZE))? {
            if size == 0 {
                return Err(ConfigError::invalid_var(env::PAGE_SIZE, "0", "must be positive"));
            }
            builder = builder.page_size(size);
        }

        Ok(builder.build())
    }

    /// Numeric chain id sent to the explorer
    pub fn chain_id(&self) -> u64 {
        self.chain as u64
    }
}

fn parse_var<T>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| ConfigError::invalid_var(name, raw.as_str(), e))
        })
        .transpose()
}

/// Browser root for a chain's explorer
fn explorer_url_for(chain: NamedChain) -> &'static str {
    chain
        .etherscan_urls()
        .map(|(_, browser)| browser)
        .unwrap_or(FALLBACK_EXPLORER_URL)
}

/// Builder for [`LedgerConfig`]
///
/// Unless set explicitly, the explorer link root follows the chain.
///
/// # Example
///
/// ```rust
/// use semioledger::LedgerConfigBuilder;
/// use std::time::Duration;
///
/// let config = LedgerConfigBuilder::new("key")
///     .base_explorer_url("https://explorer.example/")
///     .page_size(500)
///     .build();
/// assert_eq!(config.base_explorer_url, "https://explorer.example");
/// ```
pub struct LedgerConfigBuilder {
    api_key: ApiKey,
    rate_limit_delay: Duration,
    request_timeout: Duration,
    chain: NamedChain,
    api_url: String,
    base_explorer_url: Option<String>,
    page_size: u32,
}

impl LedgerConfigBuilder {
    /// Create a builder with mainnet defaults
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            rate_limit_delay: DEFAULT_RATE_LIMIT_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            chain: NamedChain::Mainnet,
            api_url: DEFAULT_API_URL.to_string(),
            base_explorer_url: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the pause after each explorer call
    pub fn rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Set the HTTP timeout per explorer call
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the chain to query
    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.chain = chain;
        self
    }

    /// Set the explorer API endpoint
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the explorer browser root for transaction links
    pub fn base_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.base_explorer_url = Some(url.into());
        self
    }

    /// Set the number of records requested per call
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> LedgerConfig {
        let base = self
            .base_explorer_url
            .unwrap_or_else(|| explorer_url_for(self.chain).to_string());

        LedgerConfig {
            api_key: self.api_key,
            rate_limit_delay: self.rate_limit_delay,
            request_timeout: self.request_timeout,
            chain: self.chain,
            api_url: self.api_url,
            base_explorer_url: base.trim_end_matches('/').to_string(),
            page_size: self.page_size,
        }
    }
}
