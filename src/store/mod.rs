/// In-memory stores shared across handlers.
///
/// The whole dataset is a few hundred records, so the "store" is a
/// whole-collection snapshot swapped atomically on each sync plus a small
/// memoization map for resolved display names. Nothing persists.
use crate::domain::LaunchRecord;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// Snapshot of the fetched launch collection.
#[derive(Default)]
pub struct LaunchStore {
    inner: RwLock<Snapshot>,
}

#[derive(Default)]
struct Snapshot {
    records: Vec<LaunchRecord>,
    fetched_at: Option<DateTime<Utc>>,
}

impl LaunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot. Readers see either the old collection or
    /// the new one, never a partial mix.
    pub fn replace_all(&self, records: Vec<LaunchRecord>) {
        let mut inner = self.inner.write().expect("launch store lock poisoned");
        inner.records = records;
        inner.fetched_at = Some(Utc::now());
    }

    pub fn snapshot(&self) -> Vec<LaunchRecord> {
        self.inner
            .read()
            .expect("launch store lock poisoned")
            .records
            .clone()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .read()
            .expect("launch store lock poisoned")
            .fetched_at
    }
}

/// Memoized id -> display-name lookups for the process lifetime.
///
/// Read-check-then-write with last-writer-wins: a given id always resolves
/// to the same name, so racing writers are harmless.
#[derive(Default)]
pub struct NameCache {
    inner: RwLock<HashMap<String, String>>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.inner
            .read()
            .expect("name cache lock poisoned")
            .get(id)
            .cloned()
    }

    pub fn insert(&self, id: String, name: String) {
        self.inner
            .write()
            .expect("name cache lock poisoned")
            .insert(id, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(id: &str) -> LaunchRecord {
        LaunchRecord {
            id: id.to_string(),
            name: format!("Launch {id}"),
            date_utc: None,
            date_precision: None,
            success: None,
            upcoming: false,
            rocket: None,
            launchpad: None,
            details: None,
            payloads: None,
            cores: None,
            links: None,
        }
    }

    #[test]
    fn replace_all_swaps_the_snapshot() {
        let store = LaunchStore::new();
        assert!(store.snapshot().is_empty());
        assert!(store.fetched_at().is_none());

        store.replace_all(vec![launch("1"), launch("2")]);
        assert_eq!(store.snapshot().len(), 2);
        assert!(store.fetched_at().is_some());

        store.replace_all(vec![launch("3")]);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "3");
    }

    #[test]
    fn name_cache_memoizes() {
        let cache = NameCache::new();
        assert_eq!(cache.get("pad-1"), None);
        cache.insert("pad-1".to_string(), "Kwajalein Atoll".to_string());
        assert_eq!(cache.get("pad-1"), Some("Kwajalein Atoll".to_string()));
    }
}
