//! Save preconditions, checked with Validation.

use crate::routine::EditedRoutine;
use crate::validation::violations::SaveViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every save precondition, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the routine may be offered for
/// saving, otherwise `Validation::Failure` listing every unmet condition.
pub fn validate_for_save(routine: &EditedRoutine) -> Validation<(), NonEmptyVec<SaveViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<SaveViolation>>> = vec![
        if routine.name().trim().is_empty() {
            Validation::fail(SaveViolation::BlankName)
        } else {
            Validation::success(())
        },
        if routine.is_empty() {
            Validation::fail(SaveViolation::NoItems)
        } else {
            Validation::success(())
        },
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Whether the routine meets every save precondition.
pub fn is_savable(routine: &EditedRoutine) -> bool {
    validate_for_save(routine).is_success()
}
