//! Storage trait definitions.

use crate::StorageResult;
use serde_json::Value;

/// A single storage tier holding JSON values by key.
///
/// Absence is reported as `Ok(None)`, never as an error. Errors are reserved
/// for a tier that cannot be used at all.
pub trait IdentityStore: Send + Sync {
    /// Retrieve a value
    fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Store a value, replacing any previous one
    fn set(&self, key: &str, value: &Value) -> StorageResult<()>;

    /// Short label used in log fields
    fn name(&self) -> &str {
        "store"
    }
}
