//! Declarative macros for ergonomic effect construction.

/// Create an `Effect::Snapshot` with a `Save` operation
///
/// # Example
///
/// ```rust,ignore
/// use taskdeck_core::save_snapshot;
///
/// save_snapshot! {
///     store: env.snapshots,
///     key: "tasks",
///     bytes: serde_json::to_vec(&state.tasks)?
/// }
/// ```
#[macro_export]
macro_rules! save_snapshot {
    (
        store: $store:expr,
        key: $key:expr,
        bytes: $bytes:expr
    ) => {
        $crate::effect::Effect::Snapshot($crate::effect::SnapshotOperation::Save {
            store: ::std::sync::Arc::clone(&$store),
            key: $crate::snapshot::SnapshotKey::new($key),
            bytes: $bytes,
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::Effect;
    use crate::snapshot::{SnapshotError, SnapshotKey, SnapshotStore};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    enum TestAction {}

    struct NullStore;

    impl SnapshotStore for NullStore {
        fn save(
            &self,
            _key: SnapshotKey,
            _bytes: Vec<u8>,
        ) -> Pin<Box<dyn Future<Output = Result<(), SnapshotError>> + Send + '_>> {
            Box::pin(async { Ok(()) })
        }

        fn load(
            &self,
            _key: SnapshotKey,
        ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, SnapshotError>> + Send + '_>>
        {
            Box::pin(async { Ok(None) })
        }
    }

    #[test]
    fn test_save_snapshot_macro() {
        let store: Arc<dyn SnapshotStore> = Arc::new(NullStore);

        let effect: Effect<TestAction> = save_snapshot! {
            store: store,
            key: "tasks",
            bytes: b"[]".to_vec()
        };

        assert!(matches!(effect, Effect::Snapshot(_)));
    }
}
