//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Flag store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base directory for the file-backed flag store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Validate the storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_relative_data() {
        let cfg = StorageConfig::default();
        assert_eq!(cfg.data_dir, PathBuf::from("./data"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_data_dir_fails_validation() {
        let cfg = StorageConfig {
            data_dir: PathBuf::new(),
        };
        assert_eq!(cfg.validate(), Err(ValidationError::EmptyDataDir));
    }
}
