use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use slab::Slab;
use tracing::{debug, trace};

use crate::{
    config::StoreConfig,
    core::indices::{IndexHandle, OrderedIndex},
    error::{Result, StoreError},
    record::Record,
    types::{Karma, RecordId, SlotKey, Timestamp},
};

/// Portable copy of every live record, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshotV1 {
    /// Live records sorted by id.
    pub records: Vec<Record>,
}

#[derive(Debug)]
struct IndexHandles {
    timestamp: IndexHandle<Timestamp>,
    karma: IndexHandle<Karma>,
    user: IndexHandle<String>,
}

#[derive(Debug)]
struct StoredRecord {
    record: Record,
    handles: IndexHandles,
}

/// In-memory record table with timestamp, karma and user indices.
///
/// Records live in a slab arena; the indices and the id table refer to them
/// by slot, and every slot keeps the handles of its three index entries so
/// erasing never scans an index.
#[derive(Debug, Default)]
pub struct RecordStore {
    slots: Slab<StoredRecord>,
    by_id: HashMap<RecordId, SlotKey>,
    by_timestamp: OrderedIndex<Timestamp>,
    by_karma: OrderedIndex<Karma>,
    by_user: OrderedIndex<String>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store sized by `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            slots: Slab::with_capacity(config.initial_capacity),
            by_id: HashMap::with_capacity(config.initial_capacity),
            ..Self::default()
        }
    }

    /// Rebuilds a store and its indices from `snapshot`.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if two records share an id.
    pub fn from_snapshot(snapshot: StoreSnapshotV1) -> Result<Self> {
        let mut store = Self::with_config(StoreConfig {
            initial_capacity: snapshot.records.len(),
        });
        for record in snapshot.records {
            store.try_put(record)?;
        }
        debug!(records = store.len(), "restored store from snapshot");
        Ok(store)
    }

    /// Copies every live record into a snapshot.
    pub fn export_snapshot(&self) -> StoreSnapshotV1 {
        let mut records: Vec<Record> = self.iter().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        StoreSnapshotV1 { records }
    }

    /// Stores `record` unless its id is taken. Returns false on a duplicate id,
    /// leaving the existing record untouched.
    pub fn put(&mut self, record: Record) -> bool {
        self.try_put(record).is_ok()
    }

    /// Like [`Self::put`], reporting the rejected id as an error.
    pub fn try_put(&mut self, record: Record) -> Result<()> {
        if self.by_id.contains_key(&record.id) {
            debug!(id = %record.id, "put rejected: duplicate key");
            return Err(StoreError::DuplicateKey(record.id));
        }
        self.insert_vacant(record);
        Ok(())
    }

    /// Removes `record.id` if present and stores `record` in its place.
    pub fn replace(&mut self, record: Record) -> Option<Record> {
        let previous = self.take(&record.id);
        self.insert_vacant(record);
        previous
    }

    /// Looks up a record by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Record> {
        let slot = self.by_id.get(id)?;
        self.slots.get(slot.0).map(|stored| &stored.record)
    }

    /// True when a record with `id` is live.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Removes the record and all of its index entries. Returns false if absent.
    pub fn erase(&mut self, id: &str) -> bool {
        self.try_erase(id).is_ok()
    }

    /// Erases `id` and hands back the removed record.
    pub fn take(&mut self, id: &str) -> Option<Record> {
        self.try_erase(id).ok()
    }

    /// Like [`Self::take`], reporting a missing id as an error.
    pub fn try_erase(&mut self, id: &str) -> Result<Record> {
        let slot = *self
            .by_id
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        let stored = self
            .slots
            .try_remove(slot.0)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        self.by_timestamp.remove(&stored.handles.timestamp);
        self.by_karma.remove(&stored.handles.karma);
        self.by_user.remove(&stored.handles.user);
        self.by_id.remove(id);

        debug!(id, slot = slot.0, "erased record");
        Ok(stored.record)
    }

    /// Visits records with `low <= timestamp <= high` in ascending timestamp
    /// order until `visit` returns false.
    pub fn range_by_timestamp<F>(&self, low: Timestamp, high: Timestamp, visit: F)
    where
        F: FnMut(&Record) -> bool,
    {
        let visited = self.visit_slots(self.by_timestamp.range(low, high), visit);
        trace!(low, high, visited, "timestamp range scan");
    }

    /// Visits records with `low <= karma <= high` in ascending karma order
    /// until `visit` returns false.
    pub fn range_by_karma<F>(&self, low: Karma, high: Karma, visit: F)
    where
        F: FnMut(&Record) -> bool,
    {
        let visited = self.visit_slots(self.by_karma.range(low, high), visit);
        trace!(low, high, visited, "karma range scan");
    }

    /// Visits records whose user is exactly `user` until `visit` returns false.
    pub fn all_by_user<F>(&self, user: &str, visit: F)
    where
        F: FnMut(&Record) -> bool,
    {
        let visited = self.visit_slots(self.by_user.equal(user.to_owned()), visit);
        trace!(user, visited, "user scan");
    }

    /// Number of records whose user is exactly `user`.
    pub fn count_by_user(&self, user: &str) -> usize {
        self.by_user.equal(user.to_owned()).count()
    }

    /// Live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.slots.iter().map(|(_, stored)| &stored.record)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when no record is live.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    // Caller guarantees `record.id` is not live.
    fn insert_vacant(&mut self, record: Record) {
        let entry = self.slots.vacant_entry();
        let slot = SlotKey(entry.key());
        let handles = IndexHandles {
            timestamp: self.by_timestamp.insert(record.timestamp, slot),
            karma: self.by_karma.insert(record.karma, slot),
            user: self.by_user.insert(record.user.clone(), slot),
        };
        self.by_id.insert(record.id.clone(), slot);
        debug!(id = %record.id, slot = slot.0, "stored record");
        entry.insert(StoredRecord { record, handles });
    }

    fn visit_slots<I, F>(&self, slots: I, mut visit: F) -> usize
    where
        I: Iterator<Item = SlotKey>,
        F: FnMut(&Record) -> bool,
    {
        let mut visited = 0;
        for slot in slots {
            let Some(stored) = self.slots.get(slot.0) else {
                continue;
            };
            visited += 1;
            if !visit(&stored.record) {
                break;
            }
        }
        visited
    }
}
