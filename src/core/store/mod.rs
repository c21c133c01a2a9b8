//! # Store
//!
//! The editor talks to persistence only through [`Store`]. The handle is
//! injected into [`Editor`](crate::core::editor::Editor) at construction,
//! so tests can swap in a fake.
//!
//! Every call is synchronous: the event loop blocks until the store answers.
//! Implementations must bound that wait themselves and report a stuck
//! backend as [`StoreError::Unavailable`].

mod sqlite;

pub use sqlite::{DEFAULT_BUSY_TIMEOUT, SqliteStore};

use crate::core::error::StoreError;
use crate::core::record::Record;

pub trait Store {
    /// All live records, ordered by id.
    fn list_all(&mut self) -> Result<Vec<Record>, StoreError>;

    /// Create a record with count 1. `name` is normalized before insert.
    fn create(&mut self, name: &str) -> Result<Record, StoreError>;

    /// Remove the oldest live record whose normalized name matches.
    fn delete(&mut self, name: &str) -> Result<(), StoreError>;
}
