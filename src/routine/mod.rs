//! Routine editing algebra.
//!
//! Three routine forms share one vocabulary of positional edits:
//! - [`NewRoutine`]: never stored, every item New
//! - [`SavedRoutine`]: as read from storage, every item Saved
//! - [`UpdatedRoutine`]: a stored routine under edit, any mix of tags
//!
//! Every operation is pure and returns a new value. Edits that change
//! nothing return a value sharing the input's item sequence.

pub mod dirty;
mod edited;
mod new;
mod saved;
mod updated;

pub use edited::EditedRoutine;
pub use new::NewRoutine;
pub use saved::{RoutineSummary, SavedRoutine};
pub use updated::UpdatedRoutine;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persistent identity of a stored routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoutineId(pub u64);

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routine#{}", self.0)
    }
}
