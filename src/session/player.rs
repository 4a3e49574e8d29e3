//! Session player: walks the expanded steps of a routine.

use super::log::{PhaseChange, SessionLog};
use super::phase::{SessionEvent, SessionPhase};
use super::settings::SessionSettings;
use crate::routine::SavedRoutine;
use crate::sequence::ItemSequence;
use crate::workout::Step;
use std::time::Duration;
use tracing::debug;

/// A workout in progress.
///
/// Every method returns a new session; the receiver is never modified.
/// Exactly one countdown exists at a time: the current step's. Moving to
/// another step (or back onto the same one) restarts it.
#[derive(Clone, Debug)]
pub struct WorkoutSession {
    steps: ItemSequence<Step>,
    phase: SessionPhase,
    remaining: Option<Duration>,
    settings: SessionSettings,
    log: SessionLog,
}

impl WorkoutSession {
    /// Expand `routine` and start on its first step.
    pub fn start(routine: &SavedRoutine, settings: SessionSettings) -> Self {
        debug!(routine = %routine.id(), "starting workout session");
        Self::from_steps(routine.expand(), settings)
    }

    /// Start on the first of `steps`, or in [`SessionPhase::Empty`] if there is none.
    pub fn from_steps(steps: ItemSequence<Step>, settings: SessionSettings) -> Self {
        let phase = if steps.is_empty() {
            debug!("routine expanded to no steps");
            SessionPhase::Empty
        } else {
            SessionPhase::Stepping { position: 0 }
        };
        let remaining = steps.get(0).and_then(Step::timer);
        Self {
            steps,
            phase,
            remaining,
            settings,
            log: SessionLog::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn steps(&self) -> &ItemSequence<Step> {
        &self.steps
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn position(&self) -> Option<usize> {
        self.phase.position()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.position().and_then(|position| self.steps.get(position))
    }

    /// `(i, n)` for an "i / n" indicator, 1-based.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.position()
            .map(|position| (position + 1, self.steps.len()))
    }

    /// Time left on the current step's countdown; `None` for untimed steps.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    pub fn is_empty_routine(&self) -> bool {
        self.phase == SessionPhase::Empty
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn back(&self) -> Self {
        self.handle(SessionEvent::Back)
    }

    pub fn next(&self) -> Self {
        self.handle(SessionEvent::Next)
    }

    pub fn finish(&self) -> Self {
        self.handle(SessionEvent::Finish)
    }

    /// Apply an event. Outside [`SessionPhase::Stepping`] every event is ignored,
    /// and so is a timer expiry on a step without a timer.
    pub fn handle(&self, event: SessionEvent) -> Self {
        let SessionPhase::Stepping { position } = self.phase else {
            return self.clone();
        };
        let last = self.steps.len().saturating_sub(1);
        let phase = match event {
            SessionEvent::Back => SessionPhase::Stepping {
                position: position.saturating_sub(1),
            },
            SessionEvent::TimerElapsed if self.remaining.is_none() => return self.clone(),
            SessionEvent::Next | SessionEvent::TimerElapsed if position >= last => {
                SessionPhase::Finished
            }
            SessionEvent::Next | SessionEvent::TimerElapsed => SessionPhase::Stepping {
                position: position + 1,
            },
            SessionEvent::Finish => SessionPhase::Finished,
        };
        self.enter(phase)
    }

    /// Run the current countdown down by `elapsed`.
    ///
    /// When it reaches zero and `auto_advance` is set, the session moves on
    /// by one step; time beyond the expiry is not carried over.
    pub fn advance_clock(&self, elapsed: Duration) -> Self {
        let (SessionPhase::Stepping { .. }, Some(remaining)) = (self.phase, self.remaining) else {
            return self.clone();
        };
        let remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() && self.settings.auto_advance {
            return self.handle(SessionEvent::TimerElapsed);
        }
        Self {
            remaining: Some(remaining),
            ..self.clone()
        }
    }

    /// Run the countdown down by the configured tick interval.
    pub fn tick(&self) -> Self {
        self.advance_clock(self.settings.tick_interval)
    }

    fn enter(&self, phase: SessionPhase) -> Self {
        let remaining = match phase {
            SessionPhase::Stepping { position } => self.steps.get(position).and_then(Step::timer),
            SessionPhase::Empty | SessionPhase::Finished => None,
        };
        let log = if phase == self.phase {
            self.log.clone()
        } else {
            debug!(
                from = self.phase.name(),
                to = phase.name(),
                position = ?phase.position(),
                "session transition"
            );
            self.log.push(PhaseChange::now(self.phase, phase))
        };
        Self {
            steps: self.steps.clone(),
            phase,
            remaining,
            settings: self.settings.clone(),
            log,
        }
    }
}
