use std::collections::BTreeSet;
use std::ops::Bound;

use crate::types::SlotKey;

/// Removal handle for one entry of an [`OrderedIndex`].
///
/// The handle is the exact composite key of the entry, so removing it is a
/// single ordered-set delete with no bucket scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHandle<K> {
    entry: (K, SlotKey),
}

impl<K> IndexHandle<K> {
    /// Attribute value the entry is filed under.
    pub fn key(&self) -> &K {
        &self.entry.0
    }

    /// Slot of the record the entry refers to.
    pub fn slot(&self) -> SlotKey {
        self.entry.1
    }
}

/// Ordered multi-valued index from an attribute to record slots.
///
/// Entries with equal keys are contiguous and ordered by slot.
#[derive(Debug, Clone)]
pub struct OrderedIndex<K> {
    entries: BTreeSet<(K, SlotKey)>,
}

impl<K> Default for OrderedIndex<K> {
    fn default() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> OrderedIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `slot` under `key` and returns the handle that removes it again.
    pub fn insert(&mut self, key: K, slot: SlotKey) -> IndexHandle<K> {
        let entry = (key, slot);
        self.entries.insert(entry.clone());
        IndexHandle { entry }
    }

    /// Removes the entry behind `handle`. Returns false if it was already gone.
    pub fn remove(&mut self, handle: &IndexHandle<K>) -> bool {
        self.entries.remove(&handle.entry)
    }

    /// Slots whose key lies in `[low, high]`, ascending by key.
    ///
    /// An inverted interval yields nothing.
    pub fn range(&self, low: K, high: K) -> impl Iterator<Item = SlotKey> + '_ {
        let entries = (low <= high).then(|| {
            self.entries.range((
                Bound::Included((low, SlotKey(usize::MIN))),
                Bound::Included((high, SlotKey(usize::MAX))),
            ))
        });
        entries.into_iter().flatten().map(|(_, slot)| *slot)
    }

    /// Slots filed under exactly `key`.
    pub fn equal(&self, key: K) -> impl Iterator<Item = SlotKey> + '_ {
        self.range(key.clone(), key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_removes_only_its_own_entry() {
        let mut index = OrderedIndex::new();
        let a = index.insert(5i64, SlotKey(0));
        let b = index.insert(5i64, SlotKey(1));
        let _c = index.insert(7i64, SlotKey(2));

        assert!(index.remove(&a));
        assert!(!index.remove(&a));
        assert_eq!(index.equal(5).collect::<Vec<_>>(), vec![SlotKey(1)]);
        assert_eq!(b.key(), &5);
        assert_eq!(b.slot(), SlotKey(1));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let mut index = OrderedIndex::new();
        for (slot, key) in [30i64, 10, 20, 10].into_iter().enumerate() {
            index.insert(key, SlotKey(slot));
        }

        let slots: Vec<_> = index.range(10, 20).collect();
        assert_eq!(slots, vec![SlotKey(1), SlotKey(3), SlotKey(2)]);
        assert_eq!(index.range(20, 20).count(), 1);
        assert_eq!(index.range(i64::MIN, i64::MAX).count(), 4);
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut index = OrderedIndex::new();
        index.insert(1i64, SlotKey(0));
        assert_eq!(index.range(5, 1).count(), 0);
    }

    #[test]
    fn string_keys_match_exactly() {
        let mut index = OrderedIndex::new();
        index.insert("master".to_string(), SlotKey(0));
        index.insert(" master ".to_string(), SlotKey(1));
        index.insert("master1".to_string(), SlotKey(2));

        let slots: Vec<_> = index.equal("master".to_string()).collect();
        assert_eq!(slots, vec![SlotKey(0)]);
    }
}
