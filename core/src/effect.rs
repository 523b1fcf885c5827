//! Side effect descriptions.
//!
//! Effects describe side effects to be performed by the runtime.
//! They are values (not execution) and are composable.

use crate::snapshot::{SnapshotKey, SnapshotStore};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Effect type - describes a side effect to be executed
///
/// Effects are NOT executed immediately. They are descriptions of what should
/// happen, returned from reducers and executed by the Store runtime.
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Run effects in parallel
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially
    Sequential(Vec<Effect<Action>>),

    /// Delayed action (for timeouts, ticks)
    Delay {
        /// How long to wait
        duration: Duration,
        /// Action to dispatch after delay
        action: Box<Action>,
    },

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

    /// Snapshot store operation (state persistence)
    Snapshot(SnapshotOperation),
}

/// A snapshot store operation carried by [`Effect::Snapshot`].
///
/// The operation captures the backend as a trait object so the reducer can
/// describe persistence without performing any I/O itself. The runtime
/// executes the operation on a spawned task and logs the outcome; saves are
/// fire-and-forget and are never retried.
pub enum SnapshotOperation {
    /// Persist a serialized state snapshot under a key, replacing any
    /// previous snapshot stored there.
    Save {
        /// Backend that stores the snapshot
        store: Arc<dyn SnapshotStore>,
        /// Key the snapshot is stored under
        key: SnapshotKey,
        /// Serialized snapshot payload
        bytes: Vec<u8>,
    },
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => {
                f.debug_tuple("Effect::Parallel").field(effects).finish()
            },
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            Effect::Snapshot(op) => f.debug_tuple("Effect::Snapshot").field(op).finish(),
        }
    }
}

// Manual Debug implementation since the store is a trait object
impl std::fmt::Debug for SnapshotOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotOperation::Save { key, bytes, .. } => f
                .debug_struct("SnapshotOperation::Save")
                .field("key", key)
                .field("bytes", &bytes.len())
                .finish_non_exhaustive(),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }
}
