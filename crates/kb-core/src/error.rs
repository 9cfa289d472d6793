//! Domain errors

use thiserror::Error;

use crate::ports::EntityKind;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Reparenting {id} would create a cycle")]
    Cycle { id: String },

    #[error("Navigation item {id} still has children")]
    HasChildren { id: String },

    #[error("Missing or invalid credential")]
    Unauthorized,

    #[error("API error: {0}")]
    Api(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}

impl DomainError {
    /// Stale-id failures are the ones a caller fixes by refetching.
    pub fn is_stale(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
