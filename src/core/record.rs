//! # Records
//!
//! A `Record` is one grocery item as the store holds it. Names are the
//! natural lookup key, so every name is normalized (trimmed, lowercased)
//! before it reaches the store.

use chrono::{DateTime, Utc};

use crate::core::error::StoreError;

/// Longest accepted item name, in characters.
pub const MAX_NAME_LEN: usize = 156;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Store-assigned, stable for the record's lifetime.
    pub id: i64,
    pub name: String,
    pub count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalize a user-typed name for a new record.
///
/// Rejects names that are empty after trimming or longer than [`MAX_NAME_LEN`].
pub fn normalize_name(raw: &str) -> Result<String, StoreError> {
    let name = lookup_name(raw)?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::Validation("name too long"));
    }
    Ok(name)
}

/// Normalize a name used to find existing records.
///
/// No length cap: an overlong name simply matches nothing.
pub fn lookup_name(raw: &str) -> Result<String, StoreError> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(StoreError::Validation("empty name"));
    }
    Ok(name)
}
