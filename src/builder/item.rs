//! Builder for exercise items.

use crate::builder::error::BuildError;
use crate::item::{ExerciseRef, ExerciseSettings, ItemKind};
use std::time::Duration;

/// Fluent builder for reps- and duration-based exercise items.
///
/// Rest between sets defaults to zero (no rest step) and weight to none.
#[derive(Clone, Debug, Default)]
pub struct ExerciseBuilder {
    exercise: Option<ExerciseRef>,
    sets: Option<u32>,
    rest_between_sets: Duration,
    weight: Option<f64>,
}

impl ExerciseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exercise (required).
    pub fn exercise(mut self, exercise: ExerciseRef) -> Self {
        self.exercise = Some(exercise);
        self
    }

    /// Set the number of sets (required, at least one).
    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn rest_between_sets(mut self, rest: Duration) -> Self {
        self.rest_between_sets = rest;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Build an item whose sets are counted in repetitions.
    pub fn reps(self, repetitions: u32) -> Result<ItemKind, BuildError> {
        if repetitions == 0 {
            return Err(BuildError::ZeroRepetitions);
        }
        Ok(ItemKind::reps(self.settings()?, repetitions))
    }

    /// Build an item whose sets are held for `duration`.
    pub fn timed(self, duration: Duration) -> Result<ItemKind, BuildError> {
        if duration.is_zero() {
            return Err(BuildError::ZeroDuration);
        }
        Ok(ItemKind::timed(self.settings()?, duration))
    }

    fn settings(self) -> Result<ExerciseSettings, BuildError> {
        let exercise = self.exercise.ok_or(BuildError::MissingExercise)?;
        let sets = self.sets.ok_or(BuildError::MissingSets)?;
        if sets == 0 {
            return Err(BuildError::ZeroSets);
        }
        Ok(ExerciseSettings {
            exercise,
            rest_between_sets: self.rest_between_sets,
            sets,
            weight: self.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunge() -> ExerciseRef {
        ExerciseRef::new(12, "Lunge")
    }

    #[test]
    fn builds_reps_item() {
        let item = ExerciseBuilder::new()
            .exercise(lunge())
            .sets(3)
            .rest_between_sets(Duration::from_secs(60))
            .weight(20.0)
            .reps(12)
            .unwrap();

        let ItemKind::ExerciseByReps {
            settings,
            repetitions,
        } = item
        else {
            panic!("expected a reps item");
        };
        assert_eq!(repetitions, 12);
        assert_eq!(settings.sets, 3);
        assert_eq!(settings.weight, Some(20.0));
        assert_eq!(settings.rest_between_sets, Duration::from_secs(60));
    }

    #[test]
    fn builds_timed_item_with_default_rest() {
        let item = ExerciseBuilder::new()
            .exercise(lunge())
            .sets(2)
            .timed(Duration::from_secs(40))
            .unwrap();

        assert_eq!(item.settings().map(|s| s.rest_between_sets), Some(Duration::ZERO));
    }

    #[test]
    fn missing_fields_are_reported() {
        assert_eq!(
            ExerciseBuilder::new().sets(1).reps(5),
            Err(BuildError::MissingExercise)
        );
        assert_eq!(
            ExerciseBuilder::new().exercise(lunge()).reps(5),
            Err(BuildError::MissingSets)
        );
    }

    #[test]
    fn zero_values_are_rejected() {
        let base = ExerciseBuilder::new().exercise(lunge()).sets(1);
        assert_eq!(base.clone().reps(0), Err(BuildError::ZeroRepetitions));
        assert_eq!(base.clone().timed(Duration::ZERO), Err(BuildError::ZeroDuration));
        assert_eq!(base.sets(0).reps(5), Err(BuildError::ZeroSets));
    }
}
