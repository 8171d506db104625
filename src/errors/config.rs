//! Errors raised while assembling a run's configuration.
//!
//! These are the only failures that stop a ledger build before any fetch.

/// Configuration problems: bad environment values or nothing to query.
///
/// # Examples
///
/// ```rust
/// use semioledger::ConfigError;
///
/// let error = ConfigError::NoValidAddresses { candidates: 3 };
/// assert_eq!(error.to_string(), "No valid addresses among 3 candidates");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Every candidate address failed validation (or none were given).
    #[error("No valid addresses among {candidates} candidates")]
    NoValidAddresses {
        /// How many candidates were checked
        candidates: usize,
    },

    /// A required environment variable is not set.
    #[error("Missing required variable {name}")]
    MissingVar {
        /// Variable name
        name: &'static str,
    },

    /// An environment variable is set but could not be parsed.
    #[error("Invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// The offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The chain id is not one alloy-chains knows about.
    #[error("Unknown chain id {chain_id}")]
    UnknownChain {
        /// Numeric chain id
        chain_id: u64,
    },

    /// The explorer API URL is not a valid absolute URL.
    #[error("Invalid explorer API URL {url:?}")]
    InvalidUrl {
        /// The URL as configured
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Create an `InvalidVar` error from any displayable reason.
    pub fn invalid_var(
        name: &'static str,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        ConfigError::InvalidVar {
            name,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
