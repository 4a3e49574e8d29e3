//! Persistence gateway: the storage collaborator and the effects over it.

use crate::routine::{EditedRoutine, RoutineId, RoutineSummary, SavedRoutine};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;

/// Errors surfaced by storage. The routine value being saved is never
/// touched, so every one of these can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Routine {0} not found")]
    NotFound(RoutineId),

    #[error("Save rejected: {0}")]
    Rejected(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Storage for routines.
///
/// `save` is one transaction: it either writes everything or nothing.
pub trait RoutineStore: Send + Sync {
    /// Write a New or Updated routine and return its canonical Saved form.
    ///
    /// New items receive fresh identities; Updated and Saved items keep
    /// theirs. For an Updated routine, stored items no longer present are
    /// deleted.
    fn save(&self, routine: &EditedRoutine) -> Result<SavedRoutine, PersistenceError>;

    fn read(&self, id: RoutineId) -> Result<SavedRoutine, PersistenceError>;

    fn read_all(&self) -> Result<Vec<RoutineSummary>, PersistenceError>;

    fn delete(&self, id: RoutineId) -> Result<(), PersistenceError>;

    /// Increment the completion counter of a stored routine.
    fn record_completion(&self, id: RoutineId) -> Result<SavedRoutine, PersistenceError>;
}

/// Environment giving access to a routine store.
pub trait HasRoutineStore {
    fn routine_store(&self) -> &dyn RoutineStore;
}

/// Save a routine.
pub fn save_routine<Env>(routine: EditedRoutine) -> BoxedEffect<SavedRoutine, PersistenceError, Env>
where
    Env: HasRoutineStore + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| env.routine_store().save(&routine)).boxed()
}

/// Read one routine in its canonical Saved form.
pub fn load_routine<Env>(id: RoutineId) -> BoxedEffect<SavedRoutine, PersistenceError, Env>
where
    Env: HasRoutineStore + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| env.routine_store().read(id)).boxed()
}

/// List every stored routine.
pub fn list_routines<Env>() -> BoxedEffect<Vec<RoutineSummary>, PersistenceError, Env>
where
    Env: HasRoutineStore + Clone + Send + Sync + 'static,
{
    from_fn(|env: &Env| env.routine_store().read_all()).boxed()
}

pub fn delete_routine<Env>(id: RoutineId) -> BoxedEffect<(), PersistenceError, Env>
where
    Env: HasRoutineStore + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| env.routine_store().delete(id)).boxed()
}

/// Count one finished session of the routine.
pub fn record_completion<Env>(id: RoutineId) -> BoxedEffect<SavedRoutine, PersistenceError, Env>
where
    Env: HasRoutineStore + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| env.routine_store().record_completion(id)).boxed()
}
