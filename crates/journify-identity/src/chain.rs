//! Precedence-ordered storage tiers.

use journify_storage::IdentityStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered list of storage tiers.
///
/// Reads walk the tiers in order and take the first usable value; the first
/// listed tier wins ties. Writes go to every tier.
///
/// A tier that errors is logged and skipped: a failed read counts as absent,
/// a failed write leaves that tier stale until the next write-through.
#[derive(Clone, Default)]
pub struct StoreChain {
    tiers: Vec<Arc<dyn IdentityStore>>,
}

impl StoreChain {
    pub fn new(tiers: Vec<Arc<dyn IdentityStore>>) -> Self {
        Self { tiers }
    }

    /// Build the standard three-tier chain.
    pub fn from_tiers(
        primary: Arc<dyn IdentityStore>,
        secondary: Arc<dyn IdentityStore>,
        tertiary: Arc<dyn IdentityStore>,
    ) -> Self {
        Self::new(vec![primary, secondary, tertiary])
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Return the first value under `key` that `accept` maps to `Some`.
    ///
    /// Values `accept` rejects (wrong JSON shape) are treated as absent.
    pub fn find_first<T>(&self, key: &str, accept: impl Fn(&Value) -> Option<T>) -> Option<T> {
        for (index, tier) in self.tiers.iter().enumerate() {
            match tier.get(key) {
                Ok(Some(value)) => match accept(&value) {
                    Some(found) => {
                        debug!(tier = index, store = tier.name(), key = key, "Resolved from tier");
                        return Some(found);
                    }
                    None => {
                        debug!(
                            tier = index,
                            store = tier.name(),
                            key = key,
                            "Ignoring unusable stored value"
                        );
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        tier = index,
                        store = tier.name(),
                        key = key,
                        error = %e,
                        "Tier read failed, treating as absent"
                    );
                }
            }
        }
        None
    }

    /// First non-empty string stored under `key`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.find_first(key, |value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
    }

    /// First JSON object stored under `key`.
    pub fn get_object(&self, key: &str) -> Option<serde_json::Map<String, Value>> {
        self.find_first(key, |value| value.as_object().cloned())
    }

    /// Write `value` under `key` to every tier.
    pub fn set_all(&self, key: &str, value: &Value) {
        for (index, tier) in self.tiers.iter().enumerate() {
            if let Err(e) = tier.set(key, value) {
                warn!(
                    tier = index,
                    store = tier.name(),
                    key = key,
                    error = %e,
                    "Tier write failed, skipping"
                );
            }
        }
    }
}

impl std::fmt::Debug for StoreChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tiers.iter().map(|tier| tier.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journify_storage::{MemoryStore, StorageError, StorageResult};
    use serde_json::json;

    struct BrokenStore;

    impl IdentityStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<Value>> {
            Err(StorageError::Backend("unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &Value) -> StorageResult<()> {
            Err(StorageError::Backend("unavailable".to_string()))
        }
    }

    fn three_memory() -> (Arc<MemoryStore>, Arc<MemoryStore>, Arc<MemoryStore>, StoreChain) {
        let a = Arc::new(MemoryStore::new());
        let b = Arc::new(MemoryStore::new());
        let c = Arc::new(MemoryStore::new());
        let chain = StoreChain::from_tiers(a.clone(), b.clone(), c.clone());
        (a, b, c, chain)
    }

    #[test]
    fn test_first_listed_tier_wins() {
        let (a, b, c, chain) = three_memory();
        b.set("k", &json!("from-b")).unwrap();
        c.set("k", &json!("from-c")).unwrap();
        assert_eq!(chain.get_string("k").as_deref(), Some("from-b"));

        a.set("k", &json!("from-a")).unwrap();
        assert_eq!(chain.get_string("k").as_deref(), Some("from-a"));
    }

    #[test]
    fn test_absent_everywhere() {
        let (_, _, _, chain) = three_memory();
        assert_eq!(chain.get_string("k"), None);
        assert_eq!(chain.get_object("k"), None);
    }

    #[test]
    fn test_wrong_shape_falls_through() {
        let (a, b, _, chain) = three_memory();
        a.set("id", &json!(42)).unwrap();
        b.set("id", &json!("u-1")).unwrap();
        assert_eq!(chain.get_string("id").as_deref(), Some("u-1"));

        a.set("traits", &json!("not an object")).unwrap();
        b.set("traits", &json!({"plan": "pro"})).unwrap();
        assert_eq!(chain.get_object("traits").unwrap()["plan"], json!("pro"));
    }

    #[test]
    fn test_empty_string_is_absent() {
        let (a, _, c, chain) = three_memory();
        a.set("id", &json!("")).unwrap();
        c.set("id", &json!("u-9")).unwrap();
        assert_eq!(chain.get_string("id").as_deref(), Some("u-9"));
    }

    #[test]
    fn test_set_all_writes_every_tier() {
        let (a, b, c, chain) = three_memory();
        chain.set_all("k", &json!("v"));

        for tier in [&a, &b, &c] {
            assert_eq!(tier.get("k").unwrap(), Some(json!("v")));
        }
    }

    #[test]
    fn test_broken_tier_is_skipped() {
        let good = Arc::new(MemoryStore::new());
        good.set("k", &json!("v")).unwrap();
        let broken: Arc<dyn IdentityStore> = Arc::new(BrokenStore);
        let chain = StoreChain::new(vec![broken, good.clone()]);

        assert_eq!(chain.get_string("k").as_deref(), Some("v"));

        chain.set_all("k", &json!("w"));
        assert_eq!(good.get("k").unwrap(), Some(json!("w")));
    }

    #[test]
    fn test_debug_lists_tier_names() {
        let (_, _, _, chain) = three_memory();
        assert_eq!(format!("{:?}", chain), r#"["memory", "memory", "memory"]"#);
        assert_eq!(chain.len(), 3);
    }
}
