//! Error types for board domain parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project identifier is not a valid UUID.
    #[error("invalid project identifier '{0}'")]
    InvalidProjectId(String),

    /// The lane name is not one of the board's lanes.
    #[error("unknown lane '{0}', expected active or finished")]
    UnknownLane(String),
}

/// Error returned while parsing project statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
