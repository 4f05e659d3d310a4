//! Shared error types for the services crate.

use std::process::ExitStatus;

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("quiz not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidId(#[from] quiz_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while converting printable markup to a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("could not start document converter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("document converter exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("document converter produced no output")]
    EmptyOutput,
    #[error("document converter I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
