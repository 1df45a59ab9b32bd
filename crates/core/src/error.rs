//! Domain error model.

use thiserror::Error;

use crate::entity::Entity;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Services never recover from these locally; every variant is surfaced to the
/// caller exactly as it was raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No stored entity of the given type has the requested identity.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A business rule was violated.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness constraint of the storage layer was violated.
    #[error("{entity} with {field} '{value}' already exists")]
    Duplication {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found<T: Entity>(id: T::Id) -> Self {
        Self::NotFound {
            entity: T::NAME,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplication<T: Entity>(field: &'static str, value: impl Into<String>) -> Self {
        Self::Duplication {
            entity: T::NAME,
            field,
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_duplication(&self) -> bool {
        matches!(self, Self::Duplication { .. })
    }
}
