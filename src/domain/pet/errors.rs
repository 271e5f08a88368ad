use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed, human-readable messages surfaced by registry operations.
pub mod messages {
    pub const EMPTY_NAME: &str = "name must not be empty";
    pub const MISSING_OWNER: &str = "pet must have an owner";
    pub const MISSING_PHONE: &str = "owner must have a registered phone";
    pub const VACCINATIONS_OUT_OF_DATE: &str = "pet does not have all vaccinations up to date";
    pub const NOT_MUNICIPALLY_REGISTERED: &str = "pet is not registered with the municipality";
    pub const ALREADY_REGISTERED: &str = "this pet is already registered";
    pub const DELETE_NOT_FOUND: &str = "cannot delete: no pet found with the given id";
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DomainError {
    /// Caller supplied malformed or incomplete input.
    #[error("{0}")]
    InvalidArgument(String),
    /// Input is well-formed but a business precondition does not hold.
    #[error("{0}")]
    InvalidState(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    pub fn invalid_argument(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    pub fn invalid_state(message: &str) -> Self {
        Self::InvalidState(message.to_string())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
