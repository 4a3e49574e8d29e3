//! Routine items and their lifecycle.
//!
//! An item's kind (reps, duration, rest) and its lifecycle (New, Saved,
//! Updated) are orthogonal. Both are closed enums so every transformation
//! can match them exhaustively.

mod kind;
mod lifecycle;

pub use kind::{ExerciseRef, ExerciseSettings, ItemKind};
pub use lifecycle::{EditItem, ItemId, Lifecycle, SavedItem, UpdatedItem};
