//! Save preconditions for edited routines.
//!
//! A routine with a blank name or no items is simply not offered for
//! saving. Checks use Stillwater's `Validation` so a caller learns about
//! every unmet condition at once rather than one at a time.
//!
//! # Example
//!
//! ```rust
//! use repset::routine::{EditedRoutine, NewRoutine};
//! use repset::validation::is_savable;
//!
//! let routine = EditedRoutine::from(NewRoutine::new().with_name("Leg Day"));
//! assert!(!is_savable(&routine)); // no items yet
//! ```

pub mod rules;
pub mod violations;

pub use rules::{is_savable, validate_for_save};
pub use violations::SaveViolation;
