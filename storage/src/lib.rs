//! File-backed snapshot store for taskdeck.
//!
//! This crate provides a JSON-file snapshot store that implements the
//! [`SnapshotStore`] trait from `taskdeck-core`. Each key is persisted as a
//! single file under a root directory, written atomically via a temp file
//! and rename.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   tasks.json        <- bytes saved under SnapshotKey::new("tasks")
//!   tasks.json.tmp    <- transient, only visible mid-write
//! ```
//!
//! The default root is `<platform data dir>/taskdeck` (for example
//! `~/.local/share/taskdeck` on Linux), overridable with the
//! `TASKDECK_DATA_DIR` environment variable.
//!
//! # Durability Semantics
//!
//! - Saves replace the whole file; there is no append or merge
//! - The temp-file-then-rename sequence means readers never observe a
//!   partially written snapshot
//! - Concurrent saves to the same key race at the rename; the last writer wins
//! - A missing file on load is `Ok(None)`, not an error
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_core::snapshot::{SnapshotKey, SnapshotStore};
//! use taskdeck_storage::JsonFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::default_location()?;
//!
//! // Persist bytes under a key
//! store.save(SnapshotKey::new("tasks"), b"[]".to_vec()).await?;
//!
//! // Read them back
//! let bytes = store.load(SnapshotKey::new("tasks")).await?;
//! assert!(bytes.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use taskdeck_core::snapshot::{SnapshotError, SnapshotKey, SnapshotStore};

/// Environment variable that overrides the default snapshot root directory.
pub const DATA_DIR_ENV: &str = "TASKDECK_DATA_DIR";

/// JSON-file snapshot store.
///
/// Stores each key as `<root>/<key>.json`. The root directory is created on
/// first save, so constructing the store never touches the filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the platform default location.
    ///
    /// Resolution order:
    /// 1. `TASKDECK_DATA_DIR` environment variable, if set and non-empty
    /// 2. `<platform data dir>/taskdeck` (e.g. `~/.local/share/taskdeck`)
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the platform reports no data
    /// directory and no override is set.
    pub fn default_location() -> Result<Self, SnapshotError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                tracing::debug!(root = %dir, "Using snapshot root from {}", DATA_DIR_ENV);
                return Ok(Self::new(dir));
            }
        }

        let base = dirs::data_dir().ok_or_else(|| {
            SnapshotError::Io("no platform data directory available".to_string())
        })?;

        Ok(Self::new(base.join("taskdeck")))
    }

    /// The root directory this store writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &SnapshotKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }

    fn tmp_path_for(&self, key: &SnapshotKey) -> PathBuf {
        self.root.join(format!("{}.json.tmp", key.as_str()))
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(
        &self,
        key: SnapshotKey,
        bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), SnapshotError>> + Send + '_>> {
        // Clone data before moving into async block
        let root = self.root.clone();
        let path = self.path_for(&key);
        let tmp = self.tmp_path_for(&key);

        Box::pin(async move {
            tokio::fs::create_dir_all(&root).await.map_err(|e| {
                SnapshotError::Io(format!(
                    "failed to create snapshot directory {}: {e}",
                    root.display()
                ))
            })?;

            // Write to a temp file first so the real file is replaced in one
            // rename and never observed half-written
            tokio::fs::write(&tmp, &bytes).await.map_err(|e| {
                SnapshotError::Io(format!("failed to write {}: {e}", tmp.display()))
            })?;

            tokio::fs::rename(&tmp, &path).await.map_err(|e| {
                SnapshotError::Io(format!(
                    "failed to rename {} to {}: {e}",
                    tmp.display(),
                    path.display()
                ))
            })?;

            tracing::debug!(
                key = %key,
                path = %path.display(),
                bytes = bytes.len(),
                "Snapshot written"
            );

            Ok(())
        })
    }

    fn load(
        &self,
        key: SnapshotKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, SnapshotError>> + Send + '_>> {
        let path = self.path_for(&key);

        Box::pin(async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    tracing::debug!(
                        key = %key,
                        path = %path.display(),
                        bytes = bytes.len(),
                        "Snapshot read"
                    );
                    Ok(Some(bytes))
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(key = %key, path = %path.display(), "No snapshot on disk");
                    Ok(None)
                },
                Err(e) => Err(SnapshotError::Io(format!(
                    "failed to read {}: {e}",
                    path.display()
                ))),
            }
        })
    }
}
