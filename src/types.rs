//! Shared primitive aliases for record attributes and storage slots.

/// Unique primary key of a record.
pub type RecordId = String;
/// Orderable timestamp attribute.
pub type Timestamp = i64;
/// Orderable karma attribute.
pub type Karma = i64;

/// Stable arena slot of a stored record.
///
/// A slot is valid from the `put` that created it until the `erase` that
/// removes it; the arena may hand the same slot out again afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(pub(crate) usize);
