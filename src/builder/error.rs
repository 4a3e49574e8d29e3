use thiserror::Error;

/// Why a builder refused to produce a value.
///
/// Missing fields and zero quantities are reported separately so a form
/// can point at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no exercise chosen; set one with .exercise(..)")]
    MissingExercise,
    #[error("number of sets is missing; set it with .sets(..)")]
    MissingSets,

    #[error("sets must be at least 1")]
    ZeroSets,
    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
    #[error("a timed set cannot last zero seconds")]
    ZeroDuration,
    #[error("session tick interval cannot be zero")]
    ZeroTickInterval,
}
