//! Error kinds shared by every domain operation.

use thiserror::Error;

/// Shorthand result for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// What can go wrong in a domain operation.
///
/// Keep this focused on deterministic business failures (validation, broken
/// references, illegal lifecycle moves). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record is still referenced by another record and cannot be removed,
    /// or an operation named a referenced record that does not exist.
    #[error("referential constraint: {0}")]
    ReferentialConstraint(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A status change not permitted by the document lifecycle.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn referential(msg: impl Into<String>) -> Self {
        Self::ReferentialConstraint(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_transition(from: impl core::fmt::Display, to: impl core::fmt::Display) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
