//! Builder API for routine items and session settings.
//!
//! Builders collect fields fluently and validate them once in the final
//! call, returning a [`BuildError`] for anything missing or degenerate.
//!
//! # Example
//!
//! ```
//! use repset::builder::ExerciseBuilder;
//! use repset::item::ExerciseRef;
//! use std::time::Duration;
//!
//! let squat = ExerciseBuilder::new()
//!     .exercise(ExerciseRef::new(1, "Squat"))
//!     .sets(5)
//!     .rest_between_sets(Duration::from_secs(120))
//!     .weight(80.0)
//!     .reps(5)
//!     .unwrap();
//! assert!(!squat.is_rest());
//! ```

pub mod error;
pub mod item;
pub mod settings;

pub use error::BuildError;
pub use item::ExerciseBuilder;
pub use settings::SessionSettingsBuilder;
