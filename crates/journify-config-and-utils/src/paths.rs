//! File system paths for the client.

use crate::{CoreError, CoreResult};
use std::fs;
use std::path::PathBuf;

/// Manages file system paths for the client.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for client files (~/.journify)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.journify`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".journify"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.journify).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.journify/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Primary identity tier (~/.journify/identity.json).
    pub fn identity_file(&self) -> PathBuf {
        self.base_dir.join("identity.json")
    }

    /// Secondary identity tier (~/.journify/cache/identity.json).
    pub fn identity_cache_file(&self) -> PathBuf {
        self.base_dir.join("cache").join("identity.json")
    }

    /// Ensure the base directory exists.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}
