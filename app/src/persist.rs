//! Snapshot persistence glue.
//!
//! The task list is serialized whole as a JSON array and stored under a
//! single fixed key. Saving happens through a reducer effect after every
//! list mutation; loading happens once at startup and fails open to an
//! empty list so a broken snapshot never blocks the app.

use crate::reducer::TaskEnvironment;
use crate::types::{Task, TaskAction};
use taskdeck_core::Effect;
use taskdeck_core::save_snapshot;
use taskdeck_core::snapshot::{SnapshotKey, SnapshotStore};

/// Key under which the serialized task list is stored.
pub const SNAPSHOT_KEY: &str = "tasks";

/// Serializes the task list to its JSON snapshot form.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(tasks)
}

/// Deserializes a JSON snapshot back into a task list.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the payload is not a valid task array.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Builds the snapshot-save effect for the current task list.
///
/// Serialization failure is logged and swallowed: the in-memory list stays
/// authoritative and the effect degrades to [`Effect::None`].
#[must_use]
pub fn save_effect(tasks: &[Task], env: &TaskEnvironment) -> Effect<TaskAction> {
    match encode(tasks) {
        Ok(bytes) => save_snapshot! {
            store: env.snapshots,
            key: SNAPSHOT_KEY,
            bytes: bytes
        },
        Err(error) => {
            tracing::warn!(%error, "Failed to serialize tasks, skipping snapshot save");
            Effect::None
        }
    }
}

/// Loads the persisted task list from the snapshot backend.
///
/// Fails open: a missing snapshot, a backend error, or a malformed payload
/// all produce an empty list. Problems are logged, never returned.
pub async fn hydrate(store: &dyn SnapshotStore) -> Vec<Task> {
    match store.load(SnapshotKey::new(SNAPSHOT_KEY)).await {
        Ok(Some(bytes)) => match decode(&bytes) {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "Hydrated tasks from snapshot");
                tasks
            }
            Err(error) => {
                tracing::warn!(%error, "Snapshot is malformed, starting with an empty list");
                Vec::new()
            }
        },
        Ok(None) => {
            tracing::debug!("No snapshot found, starting with an empty list");
            Vec::new()
        }
        Err(error) => {
            tracing::warn!(%error, "Failed to load snapshot, starting with an empty list");
            Vec::new()
        }
    }
}
