//! # Taskdeck
//!
//! A single-screen terminal task manager. Tasks have a title, an optional
//! description, and a priority; they can be toggled complete, deleted, and
//! filtered by completion state. The list persists across sessions as a
//! JSON snapshot in the user's data directory.
//!
//! ## Architecture
//!
//! All task data flows one way:
//!
//! ```text
//! key press → TaskAction → Store/TaskReducer → TaskState
//!                                                 │
//!                              snapshot effect ◄──┤
//!                                                 ▼
//!                               view (visible, counts) → TUI render
//! ```
//!
//! The reducer owns every mutation and returns a snapshot-save effect
//! after each one; the TUI holds only transient presentation state and
//! re-derives its view from the store on every change.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskdeck::{Priority, TaskAction, TaskEnvironment, TaskReducer, TaskState};
//! use taskdeck_core::environment::SystemClock;
//! use taskdeck_runtime::Store;
//! use taskdeck_testing::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TaskEnvironment::new(Arc::new(SystemClock), Arc::new(MemoryStore::new()));
//! let store = Store::new(TaskState::new(), TaskReducer::new(), env);
//!
//! // Create a task
//! let mut handle = store
//!     .send(TaskAction::Add {
//!         title: "Buy milk".to_string(),
//!         description: String::new(),
//!         priority: Priority::Medium,
//!     })
//!     .await?;
//! handle.wait().await;
//!
//! // Read state
//! let count = store.state(TaskState::count).await;
//! println!("Total tasks: {count}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod persist;
pub mod reducer;
pub mod tui;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use error::AppError;
pub use reducer::{TaskEnvironment, TaskReducer};
pub use types::{Filter, Priority, Task, TaskAction, TaskId, TaskState};

/// Store type driving the application.
pub type TaskStore =
    taskdeck_runtime::Store<TaskState, TaskAction, TaskEnvironment, TaskReducer>;
