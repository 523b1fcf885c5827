//! Derived view model for the task list.
//!
//! Pure projections of `(tasks, filter)`, recomputed on every render.
//! Nothing here is cached or persisted; the task list owned by the store
//! is the single source of truth.

use crate::types::{Filter, Task};

/// Returns the tasks visible under a filter, preserving list order.
#[must_use]
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        })
        .collect()
}

/// Task totals shown in the filter bar and footer.
///
/// Always counted over the full list, regardless of the active filter.
/// `active + completed == all` holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Every task
    pub all: usize,
    /// Tasks not yet completed
    pub active: usize,
    /// Completed tasks
    pub completed: usize,
}

impl TaskCounts {
    /// Tallies counts over the full task list.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Heading and hint shown when the visible list is empty.
#[must_use]
pub const fn empty_state(filter: Filter) -> (&'static str, &'static str) {
    match filter {
        Filter::All => ("No tasks yet", "Add a task to get started!"),
        Filter::Active => ("No active tasks", "Switch to \"All\" to see your tasks"),
        Filter::Completed => (
            "No completed tasks yet",
            "Switch to \"All\" to see your tasks",
        ),
    }
}
