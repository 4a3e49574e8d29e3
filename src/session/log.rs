//! Timestamped record of the phases a session went through.

use super::phase::SessionPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One move between phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: SessionPhase,
    pub to: SessionPhase,
    pub at: DateTime<Utc>,
}

impl PhaseChange {
    pub fn now(from: SessionPhase, to: SessionPhase) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }
}

/// Append-only log; `push` returns a new log and leaves the receiver alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    changes: Vec<PhaseChange>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    /// Phases visited, starting with the phase the first change left.
    pub fn visited(&self) -> Vec<SessionPhase> {
        self.changes
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.changes.iter().map(|change| change.to))
            .collect()
    }

    /// Wall time from the first to the last change.
    pub fn elapsed(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }
}
