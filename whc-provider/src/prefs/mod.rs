//! Preference storage contract consumed by the catalog client.
//!
//! The store is an external collaborator: it never fails, missing values
//! come back empty or `None`, and implementations provide their own
//! concurrency safety (all methods take `&self`).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Get/set access to the persisted filter state and API key.
///
/// Filter axes are keyed by a caller-chosen tag so independent screens can
/// hold independent filter sets.
pub trait PreferenceStore: Send + Sync {
    fn purity(&self, tag: &str) -> String;
    fn set_purity(&self, tag: &str, value: &str);

    fn boards(&self, tag: &str) -> String;
    fn set_boards(&self, tag: &str, value: &str);

    fn resolution(&self, tag: &str) -> String;
    fn set_resolution(&self, tag: &str, value: &str);

    fn aspect_ratio(&self, tag: &str) -> String;
    fn set_aspect_ratio(&self, tag: &str, value: &str);

    fn timespan(&self, tag: &str) -> String;
    fn set_timespan(&self, tag: &str, value: &str);

    fn api_key(&self) -> Option<String>;
    fn set_api_key(&self, key: &str);
}

const API_KEY_SLOT: &str = "api_key";

/// In-process `PreferenceStore`, also the test double.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, slot: &str) -> Option<String> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(slot).cloned()
    }

    fn set(&self, slot: String, value: &str) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(slot, value.to_string());
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn purity(&self, tag: &str) -> String {
        self.get(&format!("purity:{tag}")).unwrap_or_default()
    }

    fn set_purity(&self, tag: &str, value: &str) {
        self.set(format!("purity:{tag}"), value);
    }

    fn boards(&self, tag: &str) -> String {
        self.get(&format!("boards:{tag}")).unwrap_or_default()
    }

    fn set_boards(&self, tag: &str, value: &str) {
        self.set(format!("boards:{tag}"), value);
    }

    fn resolution(&self, tag: &str) -> String {
        self.get(&format!("resolution:{tag}")).unwrap_or_default()
    }

    fn set_resolution(&self, tag: &str, value: &str) {
        self.set(format!("resolution:{tag}"), value);
    }

    fn aspect_ratio(&self, tag: &str) -> String {
        self.get(&format!("ratio:{tag}")).unwrap_or_default()
    }

    fn set_aspect_ratio(&self, tag: &str, value: &str) {
        self.set(format!("ratio:{tag}"), value);
    }

    fn timespan(&self, tag: &str) -> String {
        self.get(&format!("timespan:{tag}")).unwrap_or_default()
    }

    fn set_timespan(&self, tag: &str, value: &str) {
        self.set(format!("timespan:{tag}"), value);
    }

    fn api_key(&self) -> Option<String> {
        self.get(API_KEY_SLOT).filter(|key| !key.is_empty())
    }

    fn set_api_key(&self, key: &str) {
        self.set(API_KEY_SLOT.to_string(), key);
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryPreferenceStore, PreferenceStore};

    #[test]
    fn missing_values_are_empty() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.purity("home"), "");
        assert_eq!(store.boards("home"), "");
        assert!(store.api_key().is_none());
    }

    #[test]
    fn tags_keep_filter_sets_apart() {
        let store = MemoryPreferenceStore::new();
        store.set_purity("home", "110");
        store.set_purity("widget", "100");
        assert_eq!(store.purity("home"), "110");
        assert_eq!(store.purity("widget"), "100");
    }

    #[test]
    fn empty_api_key_counts_as_absent() {
        let store = MemoryPreferenceStore::new();
        store.set_api_key("");
        assert!(store.api_key().is_none());
        store.set_api_key("abc");
        assert_eq!(store.api_key().as_deref(), Some("abc"));
    }
}
