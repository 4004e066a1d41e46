//! In-memory store implementations for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::adapter::{StoreAdapter, StoreError};

/// In-memory key/value store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing the adapter contract.
    ///
    /// Test hook: lets corruption-resilience tests plant unparseable values.
    pub fn seed(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

impl StoreAdapter for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Adapter for an environment with no storage capability.
///
/// Every operation fails with `StoreError::Unavailable`; `is_available`
/// reports `false`. Models the server-rendered context where session storage
/// does not exist, so callers exercise their degradation paths.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    pub fn new() -> Self {
        Self
    }
}

impl StoreAdapter for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_absent_key_is_none_not_error() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("missing"), Ok(None));
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = InMemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
    }

    #[test]
    fn set_replaces_whole_value() {
        let store = InMemoryStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k"), Ok(Some("second".to_owned())));
    }

    #[test]
    fn unavailable_store_reports_no_capability() {
        let store = UnavailableStore::new();
        assert!(!store.is_available());
        assert_eq!(store.get("k"), Err(StoreError::Unavailable));
        assert_eq!(store.set("k", "v"), Err(StoreError::Unavailable));
    }
}
