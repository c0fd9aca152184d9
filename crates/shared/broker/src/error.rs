//! Broker errors.

use thiserror::Error;

/// Errors raised by publish and consume operations.
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The exchange or queue is no longer available
    #[error("Channel closed: {0}")]
    Closed(String),
}

/// Result type alias for broker operations
pub type BrokerResult<T> = Result<T, BrokerError>;
