//! Common error types for splitsec

use thiserror::Error;

/// Common result type for splitsec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the core engine and both frontends
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Monotonic clock anomaly (stop instant before start instant)
    #[error("Clock error: {0}")]
    Clock(String),
}
