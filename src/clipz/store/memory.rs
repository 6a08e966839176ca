use super::KeyValueStore;
use crate::error::{ClipzError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Can be configured to mimic the failure modes of a real store: a byte quota
/// on writes, and a store that is not available at all.
#[derive(Default)]
pub struct InMemoryStore {
    items: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes that would push the total stored bytes above `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Every operation fails, as when no store exists in the environment.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(ClipzError::Store("Store is not available".to_string()));
        }
        Ok(())
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        if let Some(limit) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(ClipzError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.check_available()?;
        self.items.remove(key);
        Ok(())
    }

    fn item_path(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Clip;
    use chrono::{DateTime, Duration, Utc};

    pub const FIXTURE_KEY: &str = "clipboard-items";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        clips: Vec<Clip>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                clips: Vec::new(),
            }
        }

        /// Appends `count` clips, each older than the previous one, so the
        /// stored order stays newest first.
        pub fn with_clips(mut self, count: usize) -> Self {
            let base: DateTime<Utc> = Utc::now();
            let offset = self.clips.len();
            for i in 0..count {
                let n = offset + i + 1;
                let created_at = base - Duration::minutes(n as i64);
                self.clips.push(Clip::new(
                    format!("{}", 1_000 - n),
                    format!("Content for clip {}", n),
                    created_at,
                ));
            }
            self
        }

        pub fn with_clip(mut self, id: &str, content: &str) -> Self {
            self.clips
                .push(Clip::new(id, content, Utc::now() - Duration::minutes(1)));
            self
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.set_item(FIXTURE_KEY, raw).unwrap();
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            if !self.clips.is_empty() {
                let raw = serde_json::to_string(&self.clips).unwrap();
                self.store.set_item(FIXTURE_KEY, &raw).unwrap();
            }
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_values() {
        let mut store = InMemoryStore::new();
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn quota_rejects_oversized_writes() {
        let mut store = InMemoryStore::new().with_quota(10);
        store.set_item("k", "12345").unwrap();
        let err = store.set_item("k", "0123456789").unwrap_err();
        assert!(matches!(err, ClipzError::QuotaExceeded { limit: 10, .. }));
        // The old value survives a rejected write
        assert_eq!(store.get_item("k").unwrap(), Some("12345".to_string()));
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let mut store = InMemoryStore::new().with_quota(10);
        store.set_item("k", "1234").unwrap();
        store.set_item("k", "5678").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("5678".to_string()));
    }

    #[test]
    fn unavailable_store_fails_everything() {
        let mut store = InMemoryStore::unavailable();
        assert!(store.get_item("k").is_err());
        assert!(store.set_item("k", "v").is_err());
        assert!(store.remove_item("k").is_err());
    }
}
