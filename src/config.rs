//! Construction options for [`crate::core::store::RecordStore`].

use serde::{Deserialize, Serialize};

/// Sizing hints applied when a store is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of records the arena and primary table reserve up front.
    pub initial_capacity: usize,
}
