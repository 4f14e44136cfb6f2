//! QuickChat message lifecycle.
//!
//! A message is created once, then classified into exactly one of the
//! sent, stored or disregarded buckets. It leaves its bucket only when
//! deleted by hash. Stored messages are snapshotted to a JSON file.

mod error;
mod message;
mod report;
mod store;

pub use error::MessageError;
pub use message::*;
pub use report::Report;
pub use store::MessageStore;
