//! The three kinds of routine item and the fields each carries.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reference to an exercise definition (looked up by name, shown by picture).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: u64,
    pub name: String,
}

impl ExerciseRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fields shared by both exercise kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSettings {
    /// The exercise being performed
    pub exercise: ExerciseRef,
    /// Recommended rest between two consecutive sets
    pub rest_between_sets: Duration,
    /// Number of sets
    pub sets: u32,
    /// Optional load, in the user's unit
    pub weight: Option<f64>,
}

/// Payload of a routine item, independent of its lifecycle.
///
/// The set is closed: every consumer matches all three kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Each set is a number of repetitions, performed without a timer.
    ExerciseByReps {
        settings: ExerciseSettings,
        repetitions: u32,
    },
    /// Each set is held for a fixed duration.
    ExerciseByDuration {
        settings: ExerciseSettings,
        duration: Duration,
    },
    /// A single pause between two exercises.
    RestBetweenExercises { duration: Duration },
}

impl ItemKind {
    pub fn reps(settings: ExerciseSettings, repetitions: u32) -> Self {
        Self::ExerciseByReps {
            settings,
            repetitions,
        }
    }

    pub fn timed(settings: ExerciseSettings, duration: Duration) -> Self {
        Self::ExerciseByDuration { settings, duration }
    }

    pub fn rest(duration: Duration) -> Self {
        Self::RestBetweenExercises { duration }
    }

    /// Exercise settings, or `None` for a rest.
    pub fn settings(&self) -> Option<&ExerciseSettings> {
        match self {
            Self::ExerciseByReps { settings, .. } | Self::ExerciseByDuration { settings, .. } => {
                Some(settings)
            }
            Self::RestBetweenExercises { .. } => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Self::RestBetweenExercises { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> ExerciseSettings {
        ExerciseSettings {
            exercise: ExerciseRef::new(7, "Squat"),
            rest_between_sets: Duration::from_secs(90),
            sets: 4,
            weight: Some(60.0),
        }
    }

    #[test]
    fn settings_are_exposed_for_exercises_only() {
        assert_eq!(ItemKind::reps(squat(), 8).settings(), Some(&squat()));
        assert_eq!(
            ItemKind::timed(squat(), Duration::from_secs(30)).settings(),
            Some(&squat())
        );
        assert!(ItemKind::rest(Duration::from_secs(60)).settings().is_none());
    }

    #[test]
    fn is_rest_identifies_rest_items() {
        assert!(ItemKind::rest(Duration::ZERO).is_rest());
        assert!(!ItemKind::reps(squat(), 5).is_rest());
    }

    #[test]
    fn kind_serializes_correctly() {
        let kind = ItemKind::timed(squat(), Duration::from_secs(45));
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: ItemKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
