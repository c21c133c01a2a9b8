//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::error::StoreError;
use crate::core::record::{Record, lookup_name, normalize_name};
use crate::core::state::{EditorState, Session};
use crate::core::store::Store;

/// In-memory store with call counting and failure injection.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Vec<Record>,
    next_id: i64,
    /// Number of store calls made so far.
    pub calls: usize,
    /// When set, every call fails with this error.
    pub fail_with: Option<StoreError>,
}

impl MemoryStore {
    pub fn with_names(names: &[&str]) -> Self {
        let mut store = Self::default();
        for name in names {
            store.insert(name);
        }
        store
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    fn insert(&mut self, name: &str) -> Record {
        self.next_id += 1;
        let record = record(self.next_id, name);
        self.records.push(record.clone());
        record
    }

    fn begin_call(&mut self) -> Result<(), StoreError> {
        self.calls += 1;
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl Store for MemoryStore {
    fn list_all(&mut self) -> Result<Vec<Record>, StoreError> {
        self.begin_call()?;
        Ok(self.records.clone())
    }

    fn create(&mut self, name: &str) -> Result<Record, StoreError> {
        self.begin_call()?;
        let name = normalize_name(name)?;
        Ok(self.insert(&name))
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.begin_call()?;
        let name = lookup_name(name)?;
        match self.records.iter().position(|r| r.name == name) {
            Some(pos) => {
                self.records.remove(pos);
                Ok(())
            }
            None => Err(StoreError::NotFound(name)),
        }
    }
}

/// A record with count 1 and a fixed timestamp.
pub fn record(id: i64, name: &str) -> Record {
    let at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    Record {
        id,
        name: name.to_string(),
        count: 1,
        created_at: at,
        updated_at: at,
    }
}

/// Creates an EditorState holding one record per name, ids from 1.
pub fn test_state(session: Session, names: &[&str]) -> EditorState {
    let rows = names
        .iter()
        .enumerate()
        .map(|(i, name)| record(i as i64 + 1, name))
        .collect();
    EditorState::new(session, rows)
}
