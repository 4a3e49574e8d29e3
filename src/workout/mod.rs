//! Workout sequence: the flat list of timed steps a session walks through.

mod expand;
mod step;

pub use expand::expand_items;
pub use step::{SetTarget, Step};
