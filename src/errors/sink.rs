//! Errors from writing a ledger to its presentation sink.

/// Failures while rendering or writing ledger rows.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("Failed to write ledger output")]
    Io(#[from] std::io::Error),

    /// A row could not be serialized.
    #[error("Failed to serialize ledger row")]
    Serialize(#[from] serde_json::Error),
}
