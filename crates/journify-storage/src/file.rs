//! File-backed storage tier.
//!
//! All keys share one JSON object document. Writes go to a sibling temp file
//! that is renamed over the document, so readers never see a partial file.

use crate::{IdentityStore, StorageError, StorageResult};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Distinguishes temp files of concurrent writes within one process.
static TMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identity tier persisted as a JSON document on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    name: String,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self {
            path,
            name,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StorageResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(StorageError::Backend(format!(
                "expected JSON object in {}, found {}",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> StorageResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("identity.json");
        let tmp_path = dir.join(format!(
            ".{}.{}.{}.tmp",
            file_name,
            std::process::id(),
            TMP_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        ));
        let content = serde_json::to_vec_pretty(document)?;

        let write_result = (|| -> Result<(), io::Error> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&content)?;
            file.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        })();

        if let Err(err) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

impl IdentityStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let document = self.read_document()?;
        Ok(document.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> StorageResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageError::Backend(format!("file store lock poisoned: {}", e)))?;

        // An unreadable document is replaced rather than left to block
        // every later write.
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(e @ (StorageError::Encoding(_) | StorageError::Backend(_))) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable file store document"
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(key.to_string(), value.clone());
        self.write_document(&document)?;

        debug!(path = %self.path.display(), key = key, "File store updated");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
