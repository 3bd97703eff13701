use std::io;

use thiserror::Error;

/// Library-wide error type for workup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Submission is missing a description or has an empty roster.
    #[error("Please enter the project description, member names, and their expertise.")]
    IncompleteInput,

    /// Roster file not found at path.
    #[error("Roster file not found: {0}")]
    RosterFileNotFound(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error<W: Into<String>, D: Into<String>>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.into() }
    }
}
