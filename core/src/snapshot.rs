//! Snapshot store trait and related types for state persistence.
//!
//! This module defines the core abstraction for a snapshot store - a
//! key-value store holding serialized state snapshots. Each key maps to at
//! most one snapshot; saving replaces whatever was stored before.
//!
//! # Design
//!
//! The `SnapshotStore` trait is deliberately minimal. It provides exactly
//! what's needed for whole-state persistence:
//!
//! - Save a serialized snapshot under a key (full overwrite)
//! - Load the current snapshot for a key, if any
//!
//! There is no versioning, no partial update, and no query surface. State is
//! serialized whole and replaced whole.
//!
//! # Implementations
//!
//! - `JsonFileStore` (in `taskdeck-storage` crate): Production implementation
//!   backed by one file per key
//! - `MemoryStore` (in `taskdeck-testing` crate): Fast, deterministic testing
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_core::snapshot::{SnapshotError, SnapshotKey, SnapshotStore};
//!
//! async fn example<S: SnapshotStore>(store: &S) -> Result<(), SnapshotError> {
//!     let key = SnapshotKey::new("tasks");
//!
//!     // Replace the stored snapshot
//!     store.save(key.clone(), b"[]".to_vec()).await?;
//!
//!     // Load it back (None if nothing was ever saved)
//!     let snapshot = store.load(key).await?;
//!     assert!(snapshot.is_some());
//!
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use thiserror::Error;

/// Error type for `SnapshotKey` parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid snapshot key: {0}")]
pub struct ParseSnapshotKeyError(String);

/// Key identifying a snapshot in the store.
///
/// A snapshot key names a single slot in the store. For example:
/// - `"tasks"`
/// - `"preferences"`
///
/// # Design
///
/// `SnapshotKey` is a newtype wrapper around `String` that provides:
/// - Type safety (can't accidentally use a regular string)
/// - Clear intent in function signatures
/// - Serialization support for storage
///
/// # Validation
///
/// - `FromStr::from_str()`: Validates input (rejects empty strings)
/// - `From::from()` and `new()`: No validation (for internal use with trusted input)
///
/// Use `FromStr` when parsing external input. Use `new()` or `From` when
/// constructing keys from application-controlled data.
///
/// # Examples
///
/// ```
/// use taskdeck_core::snapshot::SnapshotKey;
///
/// let key = SnapshotKey::new("tasks");
/// assert_eq!(key.as_str(), "tasks");
///
/// let parsed: SnapshotKey = "tasks".parse().unwrap();
/// assert_eq!(parsed, SnapshotKey::new("tasks"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    /// Create a new `SnapshotKey` from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_core::snapshot::SnapshotKey;
    ///
    /// let key = SnapshotKey::new("tasks");
    /// ```
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the `SnapshotKey` into its inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapshotKey {
    type Err = ParseSnapshotKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseSnapshotKeyError(
                "Snapshot key cannot be empty".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<String> for SnapshotKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SnapshotKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SnapshotKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur during snapshot store operations.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// General I/O error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(String),

    /// Backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Snapshot store abstraction for whole-state persistence.
///
/// A snapshot store is a key-value store where each key holds at most one
/// serialized snapshot:
///
/// - Saving replaces the snapshot for a key atomically
/// - Loading returns the current snapshot, or `None` if nothing was saved
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to be safely used in async contexts
/// and shared across threads.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` to enable trait object usage (`Arc<dyn SnapshotStore>`). This
/// is required for the effect system where reducers create effects that
/// capture the snapshot store.
pub trait SnapshotStore: Send + Sync {
    /// Save a snapshot under a key, replacing any existing snapshot.
    ///
    /// # Parameters
    ///
    /// - `key`: The key to store the snapshot under
    /// - `bytes`: The serialized snapshot payload (consumed/moved)
    ///
    /// # Errors
    ///
    /// - `Io`: The backend failed to write the snapshot
    /// - `Backend`: Backend-specific failure
    fn save(
        &self,
        key: SnapshotKey,
        bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), SnapshotError>> + Send + '_>>;

    /// Load the current snapshot for a key.
    ///
    /// # Returns
    ///
    /// - `Some(bytes)`: A snapshot exists for this key
    /// - `None`: Nothing was ever saved under this key (not an error -
    ///   fresh installations start empty)
    ///
    /// # Errors
    ///
    /// - `Io`: The backend failed to read the snapshot
    /// - `Backend`: Backend-specific failure
    fn load(
        &self,
        key: SnapshotKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, SnapshotError>> + Send + '_>>;
}
