//! Named blob storage.
//!
//! The card store only needs get/set/remove on string values keyed by name.
//! Backends provide no transactions and no coordination between writers.

use crate::db::error::StoreError;
use std::cell::RefCell;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, StoreError>;

/// Persistent string-keyed blob area.
pub trait BlobStore: Send {
    /// Read a blob. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a blob.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a blob. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory blob store with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys and values, like browser local storage.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            blobs: RefCell::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    fn used_without(&self, key: &str) -> usize {
        self.blobs
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
