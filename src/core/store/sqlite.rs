//! SQLite-backed store.
//!
//! One table, `grocery_items`, keyed by an auto-incrementing id. Deletes
//! are soft: the row keeps its data and gets a `deleted_at` stamp.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::error::StoreError;
use crate::core::record::{Record, lookup_name, normalize_name};
use crate::core::store::Store;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS grocery_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    count       INTEGER NOT NULL DEFAULT 1 CHECK (count >= 0),
    created_at  INTEGER NOT NULL,
    updated_at  INTEGER NOT NULL,
    deleted_at  INTEGER
);
CREATE INDEX IF NOT EXISTS idx_grocery_items_live_name
    ON grocery_items (name) WHERE deleted_at IS NULL;
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and migrate the schema.
    ///
    /// `busy_timeout` bounds how long any later call waits on a locked
    /// database before failing with `Unavailable`.
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            warn!("Failed to open database {}: {}", path.display(), e);
            StoreError::Unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        info!("Database connection started ({})", path.display());
        Self::init(conn, busy_timeout)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, DEFAULT_BUSY_TIMEOUT)
    }

    fn init(conn: Connection, busy_timeout: Duration) -> Result<Self, StoreError> {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch(SCHEMA_SQL)?;
        info!("Database migrated");
        Ok(Self { conn })
    }

    /// Oldest live record with this normalized name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let name = lookup_name(name)?;
        let record = self
            .conn
            .query_row(
                "SELECT id, name, count, created_at, updated_at FROM grocery_items
                 WHERE name = ?1 AND deleted_at IS NULL
                 ORDER BY id LIMIT 1",
                params![name],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }
}

impl Store for SqliteStore {
    fn list_all(&mut self) -> Result<Vec<Record>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, count, created_at, updated_at FROM grocery_items
             WHERE deleted_at IS NULL ORDER BY id",
        )?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} grocery items", records.len());
        Ok(records)
    }

    fn create(&mut self, name: &str) -> Result<Record, StoreError> {
        let name = normalize_name(name)?;
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            "INSERT INTO grocery_items (name, count, created_at, updated_at)
             VALUES (?1, 1, ?2, ?2)",
            params![name, now],
        )?;
        let record = Record {
            id: self.conn.last_insert_rowid(),
            name,
            count: 1,
            created_at: from_millis(now),
            updated_at: from_millis(now),
        };
        info!("Created :: {:?}", record);
        Ok(record)
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let Some(record) = self.find_by_name(name)? else {
            return Err(StoreError::NotFound(name.trim().to_lowercase()));
        };
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            "UPDATE grocery_items SET deleted_at = ?1, updated_at = ?1 WHERE id = ?2",
            params![now, record.id],
        )?;
        info!("Item removed. (id={}, name={})", record.id, record.name);
        Ok(())
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        count: row.get(2)?,
        created_at: from_millis(row.get(3)?),
        updated_at: from_millis(row.get(4)?),
    })
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::MAX_NAME_LEN;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(store().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_normalizes_and_defaults_count() {
        let mut s = store();
        let record = s.create("  Milk ").unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "milk");
        assert_eq!(record.count, 1);

        let all = s.list_all().unwrap();
        assert_eq!(all, vec![record]);
    }

    #[test]
    fn test_create_rejects_blank_names_without_writing() {
        let mut s = store();
        assert_eq!(s.create(""), Err(StoreError::Validation("empty name")));
        assert_eq!(s.create("   "), Err(StoreError::Validation("empty name")));
        assert!(s.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_readding_a_name_creates_a_second_record() {
        let mut s = store();
        let first = s.create("eggs").unwrap();
        let second = s.create("EGGS").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(s.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_missing_name_is_not_found() {
        let mut s = store();
        s.create("milk").unwrap();
        assert_eq!(
            s.delete("Eggs"),
            Err(StoreError::NotFound("eggs".to_string()))
        );
        assert_eq!(s.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_is_soft_and_hides_the_row() {
        let mut s = store();
        s.create("milk").unwrap();
        s.create("eggs").unwrap();
        s.delete(" EGGS").unwrap();

        let names: Vec<String> = s.list_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["milk"]);

        let tombstones: i64 = s
            .conn
            .query_row(
                "SELECT COUNT(*) FROM grocery_items WHERE deleted_at IS NOT NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tombstones, 1);
        assert_eq!(s.delete("eggs"), Err(StoreError::NotFound("eggs".to_string())));
    }

    #[test]
    fn test_delete_removes_oldest_duplicate_first() {
        let mut s = store();
        let first = s.create("bread").unwrap();
        let second = s.create("bread").unwrap();
        s.delete("bread").unwrap();

        let remaining = s.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
        assert_ne!(remaining[0].id, first.id);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut s = store();
        s.create("milk").unwrap();
        let eggs = s.create("eggs").unwrap();
        s.delete("eggs").unwrap();
        let butter = s.create("butter").unwrap();
        assert!(butter.id > eggs.id);
    }

    #[test]
    fn test_find_by_name() {
        let mut s = store();
        s.create("milk").unwrap();
        assert_eq!(s.find_by_name("MILK").unwrap().map(|r| r.name), Some("milk".to_string()));
        assert_eq!(s.find_by_name("eggs").unwrap(), None);
        assert!(s.find_by_name(" ").is_err());
    }

    #[test]
    fn test_delete_overlong_name_is_not_found() {
        let mut s = store();
        s.create("milk").unwrap();
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(s.delete(&long), Err(StoreError::NotFound(long.clone())));
        assert_eq!(s.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_locked_database_is_unavailable_after_busy_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chef.db");
        let mut s = SqliteStore::open(&path, Duration::from_millis(50)).unwrap();

        let other = Connection::open(&path).unwrap();
        other.execute_batch("BEGIN EXCLUSIVE;").unwrap();
        assert!(matches!(s.create("milk"), Err(StoreError::Unavailable(_))));
        assert!(matches!(s.delete("milk"), Err(StoreError::Unavailable(_))));

        // Once the lock is released the store works again
        other.execute_batch("COMMIT;").unwrap();
        assert_eq!(s.create("milk").unwrap().name, "milk");
    }
}
