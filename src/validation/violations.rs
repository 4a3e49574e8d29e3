//! Reasons a routine cannot be saved yet.

use thiserror::Error;

/// A precondition for saving that the routine does not meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveViolation {
    #[error("Routine name is blank")]
    BlankName,

    #[error("Routine has no items")]
    NoItems,
}
