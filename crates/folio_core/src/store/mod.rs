//! Read-only record stores and their load-time error taxonomy.
//!
//! # Responsibility
//! - Populate the project and Prodigy stores from JSON sources.
//! - Reject structurally invalid data at load time instead of at render time.
//!
//! # Invariants
//! - Stores are immutable after construction; there is no update path.
//! - Record order from the source is preserved exactly.
//! - Duplicate `id`s within one store are a load error, never silently kept.

pub mod prodigy_store;
pub mod project_store;

use crate::model::project::ProjectValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for store construction.
pub type StoreResult<T> = Result<T, StoreError>;

/// Load-time error for either store.
#[derive(Debug)]
pub enum StoreError {
    /// Source payload is not valid JSON for the expected record shape.
    Parse(serde_json::Error),
    /// Two records in one source share an `id`.
    DuplicateId(String),
    /// A record fails structural validation.
    Invalid(ProjectValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid project data: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id `{id}`"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ProjectValidationError> for StoreError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Invalid(value)
    }
}
