//! # Taskdeck Core
//!
//! Core traits and types for the taskdeck architecture.
//!
//! This crate provides the fundamental abstractions for building state-driven
//! applications with unidirectional data flow: all mutations go through a
//! reducer, and all side effects are returned as values for a runtime to
//! execute.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (user intents)
//! - **Reducer**: Pure function `(State, Action, Environment) → Effects`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_core::*;
//!
//! // Define your state
//! #[derive(Clone, Debug, Default)]
//! struct ListState {
//!     entries: Vec<String>,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum ListAction {
//!     Append { entry: String },
//!     Clear,
//! }
//!
//! // Implement the reducer
//! impl Reducer for ListReducer {
//!     type State = ListState;
//!     type Action = ListAction;
//!     type Environment = ListEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ListState,
//!         action: ListAction,
//!         env: &ListEnvironment,
//!     ) -> SmallVec<[Effect<ListAction>; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub mod effect;
pub mod environment;
pub mod reducer;
pub mod snapshot;

mod effect_macros;

pub use effect::{Effect, SnapshotOperation};
pub use reducer::Reducer;
