use pkg_constants::messages::{SAVING_FAILED, SEARCH_FAILED, TENANT_NOT_FOUND};
use thiserror::Error;

use crate::field::QuotaResource;

/// A single quota field rejected by the minimum rule. Shown inline next to
/// the field; never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} must be at least {minimum}")]
pub struct ValidationError {
    pub field: QuotaResource,
    pub minimum: f64,
}

/// Why a tenant lookup produced no record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{}", TENANT_NOT_FOUND)]
    NotFound,

    #[error("{}: {}", SEARCH_FAILED, .0)]
    Transport(String),
}

/// Why the persistence collaborator refused or failed to store an override.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("{}: {}", SAVING_FAILED, TENANT_NOT_FOUND)]
    NotFound,

    #[error("{}: {}", SAVING_FAILED, .0)]
    Rejected(String),

    #[error("{}: {}", SAVING_FAILED, .0)]
    Transport(String),
}

/// Outcome of a failed settings submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Nothing was sent; every failing field is listed.
    #[error("{} field(s) failed validation", count(.0))]
    Invalid(Vec<ValidationError>),

    /// A previous save has not come back yet.
    #[error("a save is already in progress")]
    InProgress,

    #[error(transparent)]
    Save(#[from] SaveError),
}

fn count(errors: &[ValidationError]) -> usize {
    errors.len()
}
