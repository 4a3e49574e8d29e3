//! Expansion of a saved routine into its flat step sequence.

use super::step::{SetTarget, Step};
use crate::item::{ExerciseSettings, ItemKind};
use crate::routine::SavedRoutine;
use crate::sequence::ItemSequence;
use std::time::Duration;

impl SavedRoutine {
    /// Steps of one session of this routine, in order.
    pub fn expand(&self) -> ItemSequence<Step> {
        expand_items(self.items().iter().map(|item| item.kind())).into()
    }
}

/// Expand item payloads into steps.
///
/// Each exercise contributes one step per set, with a rest step between
/// consecutive sets. A rest of zero length produces no step at all,
/// whether it sits between sets or between exercises.
pub fn expand_items<'a, I>(items: I) -> Vec<Step>
where
    I: IntoIterator<Item = &'a ItemKind>,
{
    let mut steps = Vec::new();
    for item in items {
        match item {
            ItemKind::ExerciseByReps {
                settings,
                repetitions,
            } => push_sets(&mut steps, settings, SetTarget::Repetitions(*repetitions)),
            ItemKind::ExerciseByDuration { settings, duration } => {
                push_sets(&mut steps, settings, SetTarget::Duration(*duration))
            }
            ItemKind::RestBetweenExercises { duration } => push_rest(&mut steps, *duration),
        }
    }
    steps
}

fn push_sets(steps: &mut Vec<Step>, settings: &ExerciseSettings, target: SetTarget) {
    for set in 1..=settings.sets {
        if set > 1 {
            push_rest(steps, settings.rest_between_sets);
        }
        steps.push(Step::Exercise {
            exercise: settings.exercise.clone(),
            target,
            set,
            sets: settings.sets,
            weight: settings.weight,
        });
    }
}

fn push_rest(steps: &mut Vec<Step>, duration: Duration) {
    if !duration.is_zero() {
        steps.push(Step::Rest { duration });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ExerciseRef;

    fn settings(sets: u32, rest_secs: u64) -> ExerciseSettings {
        ExerciseSettings {
            exercise: ExerciseRef::new(1, "Squat"),
            rest_between_sets: Duration::from_secs(rest_secs),
            sets,
            weight: None,
        }
    }

    fn shape(steps: &[Step]) -> Vec<String> {
        steps
            .iter()
            .map(|step| match step {
                Step::Exercise { set, .. } => format!("Ex{set}"),
                Step::Rest { duration } => format!("Rest{}", duration.as_secs()),
            })
            .collect()
    }

    #[test]
    fn reps_sets_are_separated_by_rests() {
        let items = [ItemKind::reps(settings(3, 60), 15)];
        let steps = expand_items(&items);

        assert_eq!(shape(&steps), vec!["Ex1", "Rest60", "Ex2", "Rest60", "Ex3"]);
        assert!(steps
            .iter()
            .filter(|s| !s.is_rest())
            .all(|s| s.timer().is_none() && s.label() == "15 reps"));
    }

    #[test]
    fn timed_sets_carry_their_duration() {
        let items = [ItemKind::timed(settings(2, 10), Duration::from_secs(30))];
        let steps = expand_items(&items);

        assert_eq!(shape(&steps), vec!["Ex1", "Rest10", "Ex2"]);
        assert_eq!(steps[0].timer(), Some(Duration::from_secs(30)));
        assert_eq!(steps[2].timer(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_rests_are_elided() {
        let items = [
            ItemKind::reps(settings(2, 0), 8),
            ItemKind::rest(Duration::ZERO),
            ItemKind::rest(Duration::from_secs(45)),
        ];
        assert_eq!(shape(&expand_items(&items)), vec!["Ex1", "Ex2", "Rest45"]);
    }

    #[test]
    fn zero_sets_produce_nothing() {
        let items = [ItemKind::reps(settings(0, 30), 8)];
        assert!(expand_items(&items).is_empty());
    }

    #[test]
    fn item_order_is_preserved() {
        let items = [
            ItemKind::reps(settings(1, 30), 5),
            ItemKind::rest(Duration::from_secs(90)),
            ItemKind::timed(settings(1, 30), Duration::from_secs(20)),
        ];
        let steps = expand_items(&items);
        assert_eq!(shape(&steps), vec!["Ex1", "Rest90", "Ex1"]);
        assert_eq!(steps[2].label(), "0:20");
    }
}
