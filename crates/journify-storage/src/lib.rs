//! Storage tiers for Journify identity state.
//!
//! This crate provides the tier abstraction the identity resolver reads from
//! and writes through to, along with two backends:
//! - **Memory**: process-local map, used as the lowest-precedence tier
//! - **File**: a JSON document on disk, surviving process restarts

mod file;
mod keys;
mod memory;
mod traits;

pub use file::FileStore;
pub use keys::StorageKeys;
pub use memory::MemoryStore;
pub use traits::IdentityStore;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific storage error
    #[error("Backend storage error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_constants() {
        let keys = StorageKeys::ALL;
        for key in keys {
            assert!(!key.is_empty());
            assert!(key.starts_with("journifyio_"));
        }

        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len(), "Storage keys must be unique");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Backend storage error: quota exceeded");

        let serde_err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let err: StorageError = serde_err.into();
        assert!(err.to_string().starts_with("Encoding error:"));
    }
}
