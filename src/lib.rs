//! Repset: workout routine editing and timed session playback.
//!
//! Repset follows a "pure core, imperative shell" layout. Routines are
//! immutable values edited through pure functions; storage and exercise
//! lookup live behind Stillwater effects in [`effects`].
//!
//! # Core Concepts
//!
//! - **Items**: reps, timed and rest items, each tagged New, Saved or Updated
//! - **Routines**: [`NewRoutine`], [`SavedRoutine`] and [`UpdatedRoutine`],
//!   whose structural edits mark shifted items for rewriting
//! - **Workouts**: a saved routine expands into the flat [`Step`] list a
//!   [`WorkoutSession`] walks through
//!
//! # Example
//!
//! ```rust
//! use repset::builder::ExerciseBuilder;
//! use repset::item::{ExerciseRef, ItemKind};
//! use repset::NewRoutine;
//! use std::time::Duration;
//!
//! let squat = ExerciseBuilder::new()
//!     .exercise(ExerciseRef::new(1, "Squat"))
//!     .sets(3)
//!     .rest_between_sets(Duration::from_secs(60))
//!     .reps(10)
//!     .unwrap();
//!
//! let routine = NewRoutine::new()
//!     .with_name("Leg Day")
//!     .add(squat)
//!     .add(ItemKind::rest(Duration::from_secs(90)));
//!
//! // Out-of-range edits hand back the same items.
//! let unchanged = routine.remove_at(7);
//! assert!(unchanged.items().ptr_eq(routine.items()));
//! ```

pub mod builder;
pub mod editor;
pub mod effects;
pub mod item;
pub mod routine;
pub mod sequence;
pub mod session;
pub mod snapshot;
pub mod validation;
pub mod workout;

// Re-export commonly used types
pub use editor::RoutineEditor;
pub use item::{EditItem, ItemKind, Lifecycle};
pub use routine::{EditedRoutine, NewRoutine, SavedRoutine, UpdatedRoutine};
pub use sequence::ItemSequence;
pub use session::WorkoutSession;
pub use workout::Step;
