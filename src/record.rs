//! Record value stored by [`crate::core::store::RecordStore`].

use serde::{Deserialize, Serialize};

use crate::types::{Karma, RecordId, Timestamp};

/// Immutable-after-insert record. Updates are modeled as erase then put.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Globally unique primary key.
    pub id: RecordId,
    /// Opaque payload.
    pub title: String,
    /// Grouping key, matched by exact string equality.
    pub user: String,
    /// Orderable timestamp.
    pub timestamp: Timestamp,
    /// Orderable karma score.
    pub karma: Karma,
}

impl Record {
    /// Builds a record from its five attributes.
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        user: impl Into<String>,
        timestamp: Timestamp,
        karma: Karma,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            user: user.into(),
            timestamp,
            karma,
        }
    }
}
