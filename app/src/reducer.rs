//! Reducer logic for the task list.
//!
//! Validates user intents, mutates the task list in place, and returns a
//! snapshot-save effect after every successful list mutation. Invalid
//! intents (empty titles, unknown IDs) are silent no-ops: state stays
//! untouched and no effect is produced. Filter changes are pure UI state
//! and never persist.

use crate::persist;
use crate::types::{Task, TaskAction, TaskId, TaskState};
use std::sync::Arc;
use taskdeck_core::environment::Clock;
use taskdeck_core::snapshot::SnapshotStore;
use taskdeck_core::{Effect, Reducer, SmallVec, smallvec};

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Backend the snapshot-save effect writes to
    pub snapshots: Arc<dyn SnapshotStore>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { clock, snapshots }
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TaskReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskReducer {
    type State = TaskState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskAction::Add {
                title,
                description,
                priority,
            } => {
                let title = title.trim();
                if title.is_empty() {
                    return SmallVec::new();
                }

                let task = Task::new(
                    TaskId::new(),
                    title.to_string(),
                    description,
                    priority,
                    env.clock.now(),
                );
                state.tasks.insert(0, task);

                smallvec![persist::save_effect(&state.tasks, env)]
            }

            TaskAction::Toggle { id } => {
                let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) else {
                    return SmallVec::new();
                };
                task.toggle();

                smallvec![persist::save_effect(&state.tasks, env)]
            }

            TaskAction::Delete { id } => {
                let before = state.tasks.len();
                state.tasks.retain(|t| t.id != id);
                if state.tasks.len() == before {
                    return SmallVec::new();
                }

                smallvec![persist::save_effect(&state.tasks, env)]
            }

            TaskAction::SetFilter { filter } => {
                state.filter = filter;
                SmallVec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Filter, Priority};
    use chrono::Utc;
    use taskdeck_testing::{MemoryStore, ReducerTest, assertions, test_clock};

    fn create_test_env() -> TaskEnvironment {
        TaskEnvironment::new(Arc::new(test_clock()), Arc::new(MemoryStore::new()))
    }

    fn task(title: &str) -> Task {
        Task::new(
            TaskId::new(),
            title.to_string(),
            String::new(),
            Priority::Medium,
            Utc::now(),
        )
    }

    #[test]
    fn test_add_creates_task() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::new())
            .when_action(TaskAction::Add {
                title: "Buy milk".to_string(),
                description: "From the corner shop".to_string(),
                priority: Priority::High,
            })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let task = &state.tasks[0];
                assert_eq!(task.title, "Buy milk");
                assert_eq!(task.description, "From the corner shop");
                assert_eq!(task.priority, Priority::High);
                assert!(!task.completed);
                assert_eq!(task.created_at, test_clock().now());
            })
            .then_effects(assertions::assert_has_snapshot_effect)
            .run();
    }

    #[test]
    fn test_add_trims_title() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::new())
            .when_action(TaskAction::Add {
                title: "  Buy milk  ".to_string(),
                description: String::new(),
                priority: Priority::Medium,
            })
            .then_state(|state| {
                assert_eq!(state.tasks[0].title, "Buy milk");
            })
            .then_effects(assertions::assert_has_snapshot_effect)
            .run();
    }

    #[test]
    fn test_add_empty_title_is_silent_noop() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::new())
            .when_action(TaskAction::Add {
                title: "   ".to_string(),
                description: String::new(),
                priority: Priority::Medium,
            })
            .then_state(|state| {
                assert_eq!(state.count(), 0);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_prepends_newest_task() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::with_tasks(vec![task("First")]))
            .when_action(TaskAction::Add {
                title: "Second".to_string(),
                description: String::new(),
                priority: Priority::Low,
            })
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                assert_eq!(state.tasks[0].title, "Second");
                assert_eq!(state.tasks[1].title, "First");
            })
            .then_effects(assertions::assert_has_snapshot_effect)
            .run();
    }

    #[test]
    fn test_toggle_flips_completed() {
        let existing = task("Buy milk");
        let id = existing.id.clone();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::with_tasks(vec![existing]))
            .when_action(TaskAction::Toggle { id: id.clone() })
            .then_state(move |state| {
                assert!(state.get(&id).unwrap().completed);
            })
            .then_effects(assertions::assert_has_snapshot_effect)
            .run();
    }

    #[test]
    fn test_toggle_unknown_id_is_silent_noop() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::with_tasks(vec![task("Keep me")]))
            .when_action(TaskAction::Toggle { id: TaskId::new() })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert!(!state.tasks[0].completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delete_removes_task() {
        let existing = task("Buy milk");
        let id = existing.id.clone();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::with_tasks(vec![existing]))
            .when_action(TaskAction::Delete { id: id.clone() })
            .then_state(move |state| {
                assert_eq!(state.count(), 0);
                assert!(!state.exists(&id));
            })
            .then_effects(assertions::assert_has_snapshot_effect)
            .run();
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::with_tasks(vec![task("Keep me")]))
            .when_action(TaskAction::Delete { id: TaskId::new() })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_set_filter_changes_filter_without_effect() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::new())
            .when_action(TaskAction::SetFilter {
                filter: Filter::Completed,
            })
            .then_state(|state| {
                assert_eq!(state.filter, Filter::Completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
