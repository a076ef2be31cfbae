//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Every variant is recoverable at the store boundary: operations validate
/// fully before applying, so a failure never leaves the collections
/// partially mutated. The presentation adapter surfaces the kind plus the
/// display message as a transient notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A required input field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation referenced a nonexistent id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// Category deletion blocked by referential integrity.
    #[error("category is referenced by {dependents} product(s)")]
    Conflict { dependents: usize },

    /// An import document did not have the required shape.
    #[error("unrecognized document format: {0}")]
    Format(String),

    /// Import content was not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The key-value persistence layer failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: u32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(dependents: usize) -> Self {
        Self::Conflict { dependents }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
