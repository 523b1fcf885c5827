//! # Taskdeck Testing
//!
//! Testing utilities and helpers for the taskdeck architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - In-memory snapshot stores with inspection helpers
//! - A fluent Given-When-Then builder for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_testing::test_clock;
//! use taskdeck_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_task_flow() {
//!     let env = test_environment();
//!     let store = Store::new(TaskState::default(), TaskReducer::new(), env);
//!
//!     store.send(TaskAction::Add {
//!         title: "Buy milk".to_string(),
//!         description: String::new(),
//!         priority: Priority::Medium,
//!     }).await?;
//!
//!     let count = store.state(|s| s.tasks.len()).await;
//!     assert_eq!(count, 1);
//! }
//! ```

use chrono::{DateTime, Utc};
use taskdeck_core::environment::Clock;


/// In-memory snapshot stores for tests
pub mod stores;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use taskdeck_testing::mocks::FixedClock;
    /// use taskdeck_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
pub use stores::{FailingStore, MemoryStore};
