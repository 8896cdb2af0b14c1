use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStorage;

/// In-memory storage for tests and native builds.
///
/// Clones share the same map, so two handles behave like two tabs on one origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a storage with existing entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (key, value) in entries {
            storage.set(key, value);
        }
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("authToken").is_none());

        storage.set("authToken", "abc");
        assert_eq!(storage.get("authToken").as_deref(), Some("abc"));

        storage.set("authToken", "def");
        assert_eq!(storage.get("authToken").as_deref(), Some("def"));

        storage.remove("authToken");
        assert!(storage.get("authToken").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let first = MemoryStorage::new();
        let second = first.clone();

        first.set("username", "alice");
        assert_eq!(second.get("username").as_deref(), Some("alice"));

        second.remove("username");
        assert!(first.get("username").is_none());
    }

    #[test]
    fn test_with_entries() {
        let storage = MemoryStorage::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(storage.get("a").as_deref(), Some("1"));
        assert_eq!(storage.get("b").as_deref(), Some("2"));
    }
}
