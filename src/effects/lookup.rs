//! Exercise lookup: finding exercise definitions by name.

use crate::item::ExerciseRef;
use serde::{Deserialize, Serialize};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// A search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: u64,
    pub name: String,
}

impl From<ExerciseSummary> for ExerciseRef {
    fn from(summary: ExerciseSummary) -> Self {
        ExerciseRef::new(summary.id, summary.name)
    }
}

/// Successful outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Empty,
    Found(Vec<ExerciseSummary>),
}

impl From<Vec<ExerciseSummary>> for LookupOutcome {
    fn from(found: Vec<ExerciseSummary>) -> Self {
        if found.is_empty() {
            Self::Empty
        } else {
            Self::Found(found)
        }
    }
}

/// Why a search failed. Both cases are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service could not be reached.
    #[error("No connection to the exercise service: {0}")]
    Connectivity(String),

    /// The service answered with a non-success status.
    #[error("Exercise service returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// Remote (or local) exercise directory.
pub trait ExerciseLookup: Send + Sync {
    fn search_by_name(&self, text: &str) -> Result<Vec<ExerciseSummary>, LookupError>;
}

/// Environment giving access to an exercise lookup.
pub trait HasExerciseLookup {
    fn exercise_lookup(&self) -> &dyn ExerciseLookup;
}

/// Search exercises by name.
///
/// A blank query is answered with [`LookupOutcome::Empty`] without
/// contacting the service.
pub fn search_exercises<Env>(query: &str) -> BoxedEffect<LookupOutcome, LookupError, Env>
where
    Env: HasExerciseLookup + Clone + Send + Sync + 'static,
{
    let query = query.trim().to_string();
    if query.is_empty() {
        return pure(LookupOutcome::Empty).boxed();
    }

    from_fn(move |env: &Env| {
        match env.exercise_lookup().search_by_name(&query) {
            Ok(found) => {
                debug!(query = %query, hits = found.len(), "exercise search finished");
                Ok(LookupOutcome::from(found))
            }
            Err(error) => {
                warn!(query = %query, %error, "exercise search failed");
                Err(error)
            }
        }
    })
    .boxed()
}

/// Fixed, in-process exercise directory with case-insensitive substring search.
#[derive(Clone, Debug, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseSummary>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<ExerciseSummary>) -> Self {
        Self { exercises }
    }
}

impl ExerciseLookup for ExerciseCatalog {
    fn search_by_name(&self, text: &str) -> Result<Vec<ExerciseSummary>, LookupError> {
        let needle = text.to_lowercase();
        Ok(self
            .exercises
            .iter()
            .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
