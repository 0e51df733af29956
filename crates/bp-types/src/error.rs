use thiserror::Error;

/// Errors produced by type-level parsing and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A user-supplied point sequence could not be parsed as JSON.
    #[error("invalid point sequence: {0}")]
    InvalidPoints(String),
}
