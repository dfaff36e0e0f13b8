//! In-memory session store.

use std::collections::HashMap;

use crate::core::{Error, Result};
use crate::storage::gateway::SessionStore;

/// HashMap-backed session store with an optional byte quota.
///
/// The quota covers keys plus values, mirroring how browser session storage
/// enforces a per-origin capacity.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once the total stored bytes would
    /// exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes the store would hold after writing `value` under `key`.
    fn bytes_after_write(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.bytes_after_write(key, value);
            if needed > quota {
                return Err(Error::StorageWriteFailed(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing"), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("value"));
        assert_eq!(store.len(), 1);

        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let mut store = MemoryStore::with_quota(10);
        let result = store.set("key", "a value well past ten bytes");
        assert!(matches!(result, Err(Error::StorageWriteFailed(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let mut store = MemoryStore::with_quota(12);
        store.set("key", "12345678").unwrap(); // 3 + 8 = 11 bytes
        // Replacing the value frees the old 8 bytes first.
        store.set("key", "123456789").unwrap(); // 3 + 9 = 12 bytes
        assert_eq!(store.get("key").as_deref(), Some("123456789"));
    }
}
