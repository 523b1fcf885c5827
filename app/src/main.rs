//! Taskdeck binary entry point.
//!
//! Wires the pieces together: file-backed snapshot store, hydration,
//! store construction, the TUI loop, and a drained shutdown.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use taskdeck::{TaskEnvironment, TaskReducer, TaskState, persist, tui};
use taskdeck_core::environment::SystemClock;
use taskdeck_core::snapshot::SnapshotStore;
use taskdeck_runtime::Store;
use taskdeck_storage::JsonFileStore;
use tracing_subscriber::EnvFilter;

/// How long shutdown waits for pending snapshot saves.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let file_store =
        JsonFileStore::default_location().context("cannot determine a data directory")?;
    let data_dir = file_store.root().to_path_buf();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("cannot create data directory {}", data_dir.display()))?;

    // Stdout belongs to the TUI, so logs go to a file in the data directory.
    let _log_guard = init_logging(&data_dir);

    if let Err(reason) = tui::check_tui_support() {
        anyhow::bail!("cannot start the TUI: {reason}");
    }

    let snapshots: Arc<dyn SnapshotStore> = Arc::new(file_store);
    let tasks = persist::hydrate(snapshots.as_ref()).await;
    let environment = TaskEnvironment::new(Arc::new(SystemClock), Arc::clone(&snapshots));
    let store = Store::new(TaskState::with_tasks(tasks), TaskReducer::new(), environment);

    tracing::info!(data_dir = %data_dir.display(), "Starting taskdeck");
    let result = tui::run(&store).await;

    if let Err(error) = store.shutdown(SHUTDOWN_TIMEOUT).await {
        tracing::warn!(%error, "Shutdown finished with pending snapshot saves");
    }

    result?;
    Ok(())
}

/// Installs a file-backed tracing subscriber and returns its flush guard.
///
/// `RUST_LOG` overrides the default `info` filter for the workspace crates.
fn init_logging(dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::never(dir, "taskdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "taskdeck=info,taskdeck_core=info,taskdeck_runtime=info,taskdeck_storage=info",
        )
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
