//! Domain types for the task list.
//!
//! A task list is an ordered collection of tasks that can be created,
//! toggled complete, deleted, and filtered by completion state. New tasks
//! go to the front of the list, so iteration order is newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency of a task, fixed at creation
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal urgency
    #[default]
    Medium,
    /// Needs attention soon
    High,
}

impl Priority {
    /// Returns the uppercase badge text shown in the task list
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Returns the next priority in cycling order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Returns the previous priority in cycling order, wrapping around
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Short summary of the work; never empty after trimming
    pub title: String,
    /// Longer free-text note; empty when unused
    pub description: String,
    /// Urgency, fixed at creation
    pub priority: Priority,
    /// Whether the task is done
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task
    #[must_use]
    pub const fn new(
        id: TaskId,
        title: String,
        description: String,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Visibility filter for the task list
///
/// Process-local UI state. Never persisted; changing it never triggers a
/// snapshot save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks
    Completed,
}

impl Filter {
    /// Returns the next filter in Tab cycling order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

/// State of the task list
///
/// Tasks are ordered most recently created first. Only the task list is
/// ever persisted; the filter resets to [`Filter::All`] on every launch.
#[derive(Clone, Debug, Default)]
pub struct TaskState {
    /// All tasks, newest first
    pub tasks: Vec<Task>,
    /// Active visibility filter
    pub filter: Filter,
}

impl TaskState {
    /// Creates a new empty task state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with a previously persisted task list
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::default(),
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| &t.id == id)
    }
}

/// User intents processed by the task reducer
#[derive(Clone, Debug)]
pub enum TaskAction {
    /// Create a new task from form input
    Add {
        /// Raw title; trimmed before validation
        title: String,
        /// Free-text note; empty string when unused
        description: String,
        /// Urgency chosen in the form
        priority: Priority,
    },

    /// Flip the completion flag of a task
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Remove a task from the list
    Delete {
        /// Task to delete
        id: TaskId,
    },

    /// Replace the active visibility filter
    SetFilter {
        /// Filter to apply
        filter: Filter,
    },
}
