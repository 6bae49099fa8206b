//! In-memory record store and its ordered index.

/// Ordered multi-valued index with removal handles.
pub mod indices;
/// Record table with timestamp, karma and user access paths.
pub mod store;
