//! Validation accumulation helpers.
//!
//! Profile checks use stillwater's `Validation` so that every problem is
//! reported in one pass instead of stopping at the first.
//!
//! ```rust
//! use homeprint::effects::{combine_validations, validation_failure, validation_success};
//! use homeprint::errors::FootprintError;
//!
//! let checks = vec![
//!     validation_success(()),
//!     validation_failure(FootprintError::validation("residents", "must be at least 1")),
//!     validation_failure(FootprintError::validation("builtArea", "must be greater than 0")),
//! ];
//! let combined = combine_validations(checks);
//! assert!(combined.is_failure());
//! ```

use crate::errors::{errors_to_anyhow, FootprintError};
use stillwater::{NonEmptyVec, Validation};

/// Error collection type for validation accumulation.
pub type FootprintErrors = NonEmptyVec<FootprintError>;

/// Validation that accumulates every error rather than short-circuiting.
pub type ProfileValidation<T> = Validation<T, FootprintErrors>;

pub fn validation_success<T>(value: T) -> ProfileValidation<T> {
    Validation::Success(value)
}

pub fn validation_failure<T>(error: FootprintError) -> ProfileValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Succeed when `condition` holds, otherwise fail with a field error.
pub fn ensure(condition: bool, field: &str, message: impl FnOnce() -> String) -> ProfileValidation<()> {
    if condition {
        validation_success(())
    } else {
        validation_failure(FootprintError::validation(field, message()))
    }
}

/// Combine validations, keeping every error from every failure.
pub fn combine_validations<T>(validations: Vec<ProfileValidation<T>>) -> ProfileValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<FootprintError> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(successes),
    }
}

/// Convert a validation into `anyhow::Result` at the command boundary.
pub fn run_validation<T>(validation: ProfileValidation<T>) -> anyhow::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors_to_anyhow(errors.into_vec())),
    }
}

/// Flatten a validation into its accumulated errors, empty on success.
pub fn collect_errors<T>(validation: ProfileValidation<T>) -> Vec<FootprintError> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.into_vec(),
    }
}
