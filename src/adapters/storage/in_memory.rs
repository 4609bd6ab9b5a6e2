//! In-memory flag store.
//!
//! Map-backed implementation of the `FlagStore` port with failure
//! injection, for tests and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{FlagStore, StorageError};

/// In-memory storage for flags.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlagStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryFlagStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `get` fail, for fail-open read tests.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` fail, for best-effort write tests.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Clears all stored values.
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// True if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl FlagStore for InMemoryFlagStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Io("injected read failure".to_string()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("injected write failure".to_string()));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
