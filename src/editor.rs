//! Editing session for one routine: the current value plus a save guard.

use crate::effects::PersistenceError;
use crate::routine::{EditedRoutine, SavedRoutine};
use crate::validation::{is_savable, validate_for_save, SaveViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Holds the routine being edited and the value of any save in flight.
///
/// Edits stay available while saving; only a second save is refused.
#[derive(Clone, Debug)]
pub struct RoutineEditor {
    routine: EditedRoutine,
    in_flight: Option<EditedRoutine>,
}

impl RoutineEditor {
    pub fn new(routine: impl Into<EditedRoutine>) -> Self {
        Self {
            routine: routine.into(),
            in_flight: None,
        }
    }

    pub fn routine(&self) -> &EditedRoutine {
        &self.routine
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replace the routine with `edit(routine)`.
    ///
    /// Returns whether anything changed, so a view can skip re-rendering
    /// after a no-op edit.
    pub fn apply<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&EditedRoutine) -> EditedRoutine,
    {
        let edited = edit(&self.routine);
        let changed = edited != self.routine;
        self.routine = edited;
        changed
    }

    pub fn validate(&self) -> Validation<(), NonEmptyVec<SaveViolation>> {
        validate_for_save(&self.routine)
    }

    /// Whether a save may be offered right now.
    pub fn can_save(&self) -> bool {
        !self.is_saving() && is_savable(&self.routine)
    }

    /// Enter the saving state and hand out the routine to write.
    ///
    /// Returns `None`, without changing anything, when a save is already
    /// in flight or the routine is not savable.
    pub fn begin_save(&mut self) -> Option<EditedRoutine> {
        if !self.can_save() {
            return None;
        }
        self.in_flight = Some(self.routine.clone());
        Some(self.routine.clone())
    }

    /// Leave the saving state.
    ///
    /// On success the stored routine becomes the new editing base. Edits
    /// made while the save was in flight are kept, re-anchored on the
    /// stored identities, and still need saving. On failure the routine is
    /// kept exactly as it was so the user can retry.
    ///
    /// A result arriving with no save in flight is handed back untouched.
    pub fn finish_save(
        &mut self,
        result: Result<SavedRoutine, PersistenceError>,
    ) -> Result<SavedRoutine, PersistenceError> {
        let Some(sent) = self.in_flight.take() else {
            warn!("save result arrived with no save in flight; ignoring");
            return result;
        };
        match result {
            Ok(saved) => {
                if self.routine == sent {
                    debug!(routine = %saved.id(), "save finished");
                    self.routine = EditedRoutine::from(&saved);
                } else {
                    debug!(routine = %saved.id(), "save finished; keeping later edits");
                    self.routine = self.routine.rebase_onto(&saved);
                }
                Ok(saved)
            }
            Err(error) => {
                warn!(%error, "save failed; keeping edits");
                Err(error)
            }
        }
    }
}
