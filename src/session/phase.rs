//! Phases of a workout session and the events that move between them.

use serde::{Deserialize, Serialize};

/// Where a session currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// The routine expanded to no steps; there is nothing to walk.
    Empty,
    /// Showing the step at `position`.
    Stepping { position: usize },
    /// The user left the sequence.
    Finished,
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Stepping { .. } => "Stepping",
            Self::Finished => "Finished",
        }
    }

    /// No event leaves this phase.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Empty | Self::Finished)
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Stepping { position } => Some(*position),
            Self::Empty | Self::Finished => None,
        }
    }
}

/// Input to the session player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Go to the previous step; stays on the first one.
    Back,
    /// Go to the next step; finishes after the last one.
    Next,
    /// The current step's countdown reached zero.
    TimerElapsed,
    /// Leave the sequence.
    Finish,
}
