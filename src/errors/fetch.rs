//! Errors from explorer data retrieval.
//!
//! A `FetchError` never aborts a ledger build: the pipeline logs it and
//! carries on with an empty batch for that call.

/// Failures of a single explorer call.
///
/// # Examples
///
/// ```rust
/// use semioledger::FetchError;
///
/// let error = FetchError::explorer("NOTOK", "Invalid API Key");
/// assert_eq!(error.to_string(), "Explorer returned an error: NOTOK (Invalid API Key)");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, reset).
    #[error("Request for {action} failed")]
    Transport {
        /// Explorer action being requested
        action: String,
        #[source]
        source: reqwest::Error,
    },

    /// The explorer answered with a non-success HTTP status.
    #[error("Explorer responded with HTTP {status} for {action}")]
    Status {
        /// Explorer action being requested
        action: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body is not the expected JSON envelope.
    #[error("Undecodable response for {action}")]
    Decode {
        /// Explorer action being requested
        action: String,
        #[source]
        source: reqwest::Error,
    },

    /// The envelope reports an error instead of a record list.
    ///
    /// Explorers signal rate limiting, bad keys and bad parameters this way,
    /// with HTTP 200 and `status = "0"`.
    #[error("Explorer returned an error: {message} ({detail})")]
    Explorer {
        /// Envelope `message`
        message: String,
        /// Envelope `result` rendered as text
        detail: String,
    },
}

impl FetchError {
    /// Create an `Explorer` error from envelope fields.
    pub fn explorer(message: impl Into<String>, detail: impl Into<String>) -> Self {
        FetchError::Explorer {
            message: message.into(),
            detail: detail.into(),
        }
    }
}
