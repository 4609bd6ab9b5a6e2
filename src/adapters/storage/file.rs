//! File-backed flag store.
//!
//! Stores each key as one file under a base directory, the desktop/dev
//! stand-in for the mobile platform's key-value storage. Keys are
//! sanitized into file names; values are written verbatim.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{FlagStore, StorageError};

/// One-file-per-key storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    base_path: PathBuf,
}

impl FileFlagStore {
    /// Creates a store rooted at `base_path`. The directory is created on
    /// first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        // Keys are caller-controlled; keep file names safe.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.base_path.join(name)
    }
}

#[async_trait]
impl FlagStore for FileFlagStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.file_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        fs::write(self.file_path(key), value)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}
