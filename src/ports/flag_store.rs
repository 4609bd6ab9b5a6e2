//! Flag store port - per-identity key-value persistence.
//!
//! The flow core keeps exactly two keys per identity:
//! `hasCompletedOnboarding_<identityId>` (the literal string `"true"` or
//! absent) and `userAnswers_<identityId>` (JSON-serialized answers).
//! Writes are per-key atomic; there is no cross-identity contention.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from flag store operations.
///
/// The application layer treats these fail-open: a failed read means "not
/// set", a failed write is logged and progress continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage I/O failure: {0}")]
    Io(String),

    #[error("Failed to serialize value: {0}")]
    Serialization(String),
}

/// Port for persisting small string flags.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Reads the value stored under `key`, or None if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_displays_detail() {
        let err = StorageError::Io("disk full".to_string());
        assert_eq!(format!("{}", err), "Storage I/O failure: disk full");
    }

    #[test]
    fn flag_store_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn FlagStore) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn FlagStore>>();
    }
}
