//! Session player over an expanded routine.
//!
//! `Back` steps to the previous step (never before the first), `Next` or a
//! timer expiry steps forward and finishes after the last step, `Finish`
//! leaves the sequence. A routine that expands to nothing starts, and
//! stays, in [`SessionPhase::Empty`].

mod log;
mod phase;
mod player;
mod settings;

pub use log::{PhaseChange, SessionLog};
pub use phase::{SessionEvent, SessionPhase};
pub use player::WorkoutSession;
pub use settings::{SessionSettings, DEFAULT_TICK_INTERVAL};
