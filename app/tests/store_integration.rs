//! End-to-end tests driving a real store with the task reducer.

use std::sync::Arc;
use std::time::Duration;

use taskdeck::{Filter, Priority, TaskAction, TaskEnvironment, TaskReducer, TaskState, TaskStore};
use taskdeck::{persist, view};
use taskdeck_core::environment::Clock;
use taskdeck_runtime::{Store, StoreError};
use taskdeck_storage::JsonFileStore;
use taskdeck_testing::{MemoryStore, test_clock};

fn test_store() -> (TaskStore, Arc<MemoryStore>) {
    let snapshots = Arc::new(MemoryStore::new());
    let environment = TaskEnvironment::new(Arc::new(test_clock()), snapshots.clone());
    let store = Store::new(TaskState::new(), TaskReducer::new(), environment);
    (store, snapshots)
}

fn add(title: &str, priority: Priority) -> TaskAction {
    TaskAction::Add {
        title: title.to_string(),
        description: String::new(),
        priority,
    }
}

async fn dispatch(store: &TaskStore, action: TaskAction) {
    let mut handle = store.send(action).await.unwrap();
    handle.wait().await;
}

#[tokio::test]
async fn add_persists_the_task() {
    let (store, snapshots) = test_store();

    dispatch(
        &store,
        TaskAction::Add {
            title: "Buy milk".to_string(),
            description: "Semi-skimmed".to_string(),
            priority: Priority::High,
        },
    )
    .await;

    assert_eq!(store.state(TaskState::count).await, 1);

    let bytes = snapshots.saved("tasks").unwrap();
    let saved = persist::decode(&bytes).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Buy milk");
    assert_eq!(saved[0].description, "Semi-skimmed");
    assert_eq!(saved[0].priority, Priority::High);
    assert_eq!(saved[0].created_at, test_clock().now());
    assert!(!saved[0].completed);
}

#[tokio::test]
async fn add_orders_newest_first() {
    let (store, _snapshots) = test_store();

    dispatch(&store, add("First", Priority::Medium)).await;
    dispatch(&store, add("Second", Priority::Medium)).await;

    let titles = store
        .state(|state| {
            state
                .tasks
                .iter()
                .map(|task| task.title.clone())
                .collect::<Vec<_>>()
        })
        .await;
    assert_eq!(titles, ["Second", "First"]);
}

#[tokio::test]
async fn added_task_is_active_not_completed() {
    let (store, _snapshots) = test_store();

    dispatch(
        &store,
        TaskAction::Add {
            title: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::Low,
        },
    )
    .await;

    store
        .state(|state| {
            assert!(!state.tasks[0].completed);
            assert_eq!(view::visible(&state.tasks, Filter::All).len(), 1);
            assert_eq!(view::visible(&state.tasks, Filter::Active).len(), 1);
            assert!(view::visible(&state.tasks, Filter::Completed).is_empty());
        })
        .await;
}

#[tokio::test]
async fn toggle_persists_the_flip() {
    let (store, snapshots) = test_store();

    dispatch(&store, add("Buy milk", Priority::Medium)).await;
    let id = store.state(|state| state.tasks[0].id.clone()).await;
    dispatch(&store, TaskAction::Toggle { id }).await;

    let saved = persist::decode(&snapshots.saved("tasks").unwrap()).unwrap();
    assert!(saved[0].completed);
    assert_eq!(snapshots.save_count(), 2);
}

#[tokio::test]
async fn toggling_the_only_task_empties_the_active_view() {
    let (store, _snapshots) = test_store();

    dispatch(&store, add("Buy milk", Priority::Medium)).await;
    let id = store.state(|state| state.tasks[0].id.clone()).await;
    dispatch(&store, TaskAction::Toggle { id }).await;

    store
        .state(|state| {
            let counts = view::TaskCounts::tally(&state.tasks);
            assert_eq!(counts.all, 1);
            assert_eq!(counts.active, 0);
            assert_eq!(counts.completed, 1);
            assert!(view::visible(&state.tasks, Filter::Active).is_empty());
        })
        .await;
}

#[tokio::test]
async fn delete_twice_saves_once() {
    let (store, snapshots) = test_store();

    dispatch(&store, add("Buy milk", Priority::Medium)).await;
    let id = store.state(|state| state.tasks[0].id.clone()).await;

    dispatch(&store, TaskAction::Delete { id: id.clone() }).await;
    assert_eq!(store.state(TaskState::count).await, 0);
    assert_eq!(snapshots.save_count(), 2);

    dispatch(&store, TaskAction::Delete { id }).await;
    assert_eq!(snapshots.save_count(), 2);
}

#[tokio::test]
async fn blank_title_never_reaches_the_list() {
    let (store, snapshots) = test_store();

    dispatch(&store, add("   ", Priority::Low)).await;

    assert_eq!(store.state(TaskState::count).await, 0);
    assert_eq!(snapshots.save_count(), 0);
}

#[tokio::test]
async fn set_filter_changes_state_without_saving() {
    let (store, snapshots) = test_store();

    dispatch(&store, add("One", Priority::Medium)).await;
    dispatch(&store, add("Two", Priority::Medium)).await;
    dispatch(&store, add("Three", Priority::Medium)).await;
    let id = store.state(|state| state.tasks[1].id.clone()).await;
    dispatch(&store, TaskAction::Toggle { id }).await;

    dispatch(
        &store,
        TaskAction::SetFilter {
            filter: Filter::Active,
        },
    )
    .await;

    let (filter, titles) = store
        .state(|state| {
            let titles = view::visible(&state.tasks, state.filter)
                .into_iter()
                .map(|task| task.title.clone())
                .collect::<Vec<_>>();
            (state.filter, titles)
        })
        .await;
    assert_eq!(filter, Filter::Active);
    assert_eq!(titles, ["Three", "One"]);
    assert_eq!(snapshots.save_count(), 4);
}

#[tokio::test]
async fn hydration_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();

    let environment = TaskEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(JsonFileStore::new(dir.path())),
    );
    let store = Store::new(TaskState::new(), TaskReducer::new(), environment);
    dispatch(&store, add("Persisted", Priority::High)).await;
    store.shutdown(Duration::from_secs(5)).await.unwrap();

    let reopened = JsonFileStore::new(dir.path());
    let tasks = persist::hydrate(&reopened).await;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Persisted");
    assert_eq!(tasks[0].priority, Priority::High);
}

#[tokio::test]
async fn send_after_shutdown_is_rejected() {
    let (store, _snapshots) = test_store();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store
        .send(TaskAction::SetFilter {
            filter: Filter::Completed,
        })
        .await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}
