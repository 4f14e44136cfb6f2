//! Message lifecycle errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Invalid action. Please choose Send, Store, or Disregard")]
    InvalidAction(String),

    #[error("Cell phone number incorrectly formatted or does not contain international code.")]
    InvalidRecipient(String),

    #[error("Storage error: {0}")]
    Store(#[from] snapshot_store::StoreError),
}
