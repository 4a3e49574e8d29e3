//! Player-facing steps.

use crate::item::ExerciseRef;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What one exercise set asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetTarget {
    Repetitions(u32),
    Duration(Duration),
}

/// One unit of a workout: an exercise set or a rest interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Step {
    Exercise {
        exercise: ExerciseRef,
        target: SetTarget,
        /// 1-based set number within its item
        set: u32,
        sets: u32,
        weight: Option<f64>,
    },
    Rest { duration: Duration },
}

impl Step {
    /// Countdown for this step; `None` means the step waits for the user.
    pub fn timer(&self) -> Option<Duration> {
        match self {
            Self::Exercise {
                target: SetTarget::Duration(duration),
                ..
            } => Some(*duration),
            Self::Exercise { .. } => None,
            Self::Rest { duration } => Some(*duration),
        }
    }

    /// Exercise definition for pictures and detail views; `None` for rests.
    pub fn exercise(&self) -> Option<&ExerciseRef> {
        match self {
            Self::Exercise { exercise, .. } => Some(exercise),
            Self::Rest { .. } => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest { .. })
    }

    /// Short display text: `"15 reps"` or `"1:30"`.
    pub fn label(&self) -> String {
        match self {
            Self::Exercise {
                target: SetTarget::Repetitions(reps),
                ..
            } => format!("{reps} reps"),
            Self::Exercise {
                target: SetTarget::Duration(duration),
                ..
            } => clock(*duration),
            Self::Rest { duration } => clock(*duration),
        }
    }
}

fn clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plank(target: SetTarget) -> Step {
        Step::Exercise {
            exercise: ExerciseRef::new(3, "Plank"),
            target,
            set: 1,
            sets: 3,
            weight: None,
        }
    }

    #[test]
    fn timer_is_present_for_timed_sets_and_rests() {
        assert_eq!(plank(SetTarget::Repetitions(10)).timer(), None);
        assert_eq!(
            plank(SetTarget::Duration(Duration::from_secs(40))).timer(),
            Some(Duration::from_secs(40))
        );
        assert_eq!(
            Step::Rest {
                duration: Duration::from_secs(60)
            }
            .timer(),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn rest_has_no_exercise() {
        let rest = Step::Rest {
            duration: Duration::from_secs(5),
        };
        assert!(rest.exercise().is_none());
        assert!(rest.is_rest());
        assert_eq!(
            plank(SetTarget::Repetitions(1)).exercise().map(|e| e.id),
            Some(3)
        );
    }

    #[test]
    fn labels_render_reps_and_clock() {
        assert_eq!(plank(SetTarget::Repetitions(15)).label(), "15 reps");
        assert_eq!(
            plank(SetTarget::Duration(Duration::from_secs(90))).label(),
            "1:30"
        );
        assert_eq!(
            Step::Rest {
                duration: Duration::from_secs(45)
            }
            .label(),
            "0:45"
        );
    }
}
