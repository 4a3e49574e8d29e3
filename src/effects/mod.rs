//! Effectful collaborators: the imperative shell around the pure core.
//!
//! Storage and exercise lookup are reached through an environment, so a
//! host supplies real implementations and tests supply in-memory ones.
//! Operations are Stillwater effects: build them, then `run(&env).await`.
//!
//! # Key Concepts
//!
//! - **Persistence gateway**: [`RoutineStore`], one transaction per save
//! - **Exercise lookup**: [`ExerciseLookup`], empty / found / failed
//! - **Environments**: [`HasRoutineStore`] and [`HasExerciseLookup`]

mod lookup;
mod memory;
mod store;

pub use lookup::{
    search_exercises, ExerciseCatalog, ExerciseLookup, ExerciseSummary, HasExerciseLookup,
    LookupError, LookupOutcome,
};
pub use memory::InMemoryRoutineStore;
pub use store::{
    delete_routine, list_routines, load_routine, record_completion, save_routine,
    HasRoutineStore, PersistenceError, RoutineStore,
};
