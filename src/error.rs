//! Error values for store operations.

use thiserror::Error;

use crate::types::RecordId;

/// Expected, non-fatal outcomes of a rejected store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A live record already uses this id.
    #[error("record already exists: {0}")]
    DuplicateKey(RecordId),

    /// No live record has this id.
    #[error("record not found: {0}")]
    NotFound(RecordId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
