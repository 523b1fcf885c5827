//! In-memory snapshot stores for tests
//!
//! [`MemoryStore`] records saves so tests can inspect what was persisted.
//! [`FailingStore`] fails every operation to exercise error paths.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use taskdeck_core::snapshot::{SnapshotError, SnapshotKey, SnapshotStore};

/// In-memory snapshot store backed by a `HashMap`
///
/// Clones share the same underlying map, so a test can hold one clone for
/// inspection while the store under test holds another.
///
/// # Example
///
/// ```
/// use taskdeck_core::snapshot::{SnapshotKey, SnapshotStore};
/// use taskdeck_testing::MemoryStore;
///
/// let store = MemoryStore::new();
/// tokio_test::block_on(async {
///     store.save(SnapshotKey::new("tasks"), vec![1, 2, 3]).await.unwrap();
/// });
/// assert_eq!(store.saved("tasks"), Some(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes last saved under `key`, if any
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned, which only happens if
    /// another test thread panicked while saving.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn saved(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    /// Total number of save calls across all keys
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for MemoryStore {
    fn save(
        &self,
        key: SnapshotKey,
        bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), SnapshotError>> + Send + '_>> {
        let entries = Arc::clone(&self.entries);
        let saves = Arc::clone(&self.saves);
        Box::pin(async move {
            let mut guard = entries
                .lock()
                .map_err(|e| SnapshotError::Backend(e.to_string()))?;
            guard.insert(key.into_inner(), bytes);
            saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn load(
        &self,
        key: SnapshotKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, SnapshotError>> + Send + '_>> {
        let entries = Arc::clone(&self.entries);
        Box::pin(async move {
            let guard = entries
                .lock()
                .map_err(|e| SnapshotError::Backend(e.to_string()))?;
            Ok(guard.get(key.as_str()).cloned())
        })
    }
}

/// Snapshot store that fails every operation
///
/// Useful for asserting that save failures are logged without wedging
/// effect tracking, and that load failures fall back to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn save(
        &self,
        key: SnapshotKey,
        _bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), SnapshotError>> + Send + '_>> {
        Box::pin(async move {
            Err(SnapshotError::Backend(format!(
                "simulated save failure for {key}"
            )))
        })
    }

    fn load(
        &self,
        key: SnapshotKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, SnapshotError>> + Send + '_>> {
        Box::pin(async move {
            Err(SnapshotError::Backend(format!(
                "simulated load failure for {key}"
            )))
        })
    }
}
