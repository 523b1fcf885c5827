//! Application error types.

use thiserror::Error;

/// Errors surfaced by the application shell.
///
/// Domain-level problems (empty titles, unknown task IDs, broken
/// snapshots) are silent no-ops or fail-open paths and never reach this
/// type. What remains is the terminal and the store runtime.
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal setup, drawing, or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The store rejected an action or failed during shutdown.
    #[error("Store error: {0}")]
    Store(#[from] taskdeck_runtime::StoreError),
}
