//! In-process storage tier.

use crate::{IdentityStore, StorageError, StorageResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Identity tier backed by a map in process memory.
///
/// Values live only as long as the store itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.data.lock().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentityStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let data = self
            .data
            .lock()
            .map_err(|e| StorageError::Backend(format!("memory store poisoned: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> StorageResult<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| StorageError::Backend(format!("memory store poisoned: {}", e)))?;
        data.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("key", &json!("value")).unwrap();
        assert_eq!(store.get("key").unwrap(), Some(json!("value")));
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("key", &json!({"plan": "pro"})).unwrap();
        assert_eq!(store.get("key").unwrap(), Some(json!({"plan": "pro"})));
        assert_eq!(store.len(), 1);
    }
}
