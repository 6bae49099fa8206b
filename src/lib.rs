//! In-memory record store with ordered timestamp and karma range scans and
//! exact-match user lookup.
//!
//! # Examples
//!
//! ```
//! use recstore::{core::store::RecordStore, record::Record};
//!
//! let mut store = RecordStore::new();
//! assert!(store.put(Record::new("id1", "Hello there", "master", 100, 1000)));
//! assert!(!store.put(Record::new("id1", "Duplicate", "master", 200, 0)));
//!
//! let mut titles = Vec::new();
//! store.range_by_karma(0, 2000, |r| {
//!     titles.push(r.title.clone());
//!     true
//! });
//! assert_eq!(titles, ["Hello there"]);
//!
//! assert!(store.erase("id1"));
//! assert!(store.get_by_id("id1").is_none());
//! ```
#![deny(missing_docs)]

/// Store construction options.
pub mod config;
/// Core in-memory store and index helpers.
pub mod core;
/// Typed errors for rejected operations.
pub mod error;
/// Record value type.
pub mod record;
/// Shared primitive types.
pub mod types;

pub use crate::{
    config::StoreConfig,
    core::store::{RecordStore, StoreSnapshotV1},
    error::{Result, StoreError},
    record::Record,
};
