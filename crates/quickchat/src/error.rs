//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Storage error: {0}")]
    Store(#[from] snapshot_store::StoreError),

    #[error("Message error: {0}")]
    Message(#[from] message_store::MessageError),

    #[error("Input closed")]
    InputClosed,
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
