//! Error types for Stencil
//!
//! One error enum per demo domain plus a top-level [`AppError`] that wraps
//! them transparently. Validation errors carry fixed messages so callers can
//! surface them verbatim; cancellation is a distinct variant in each domain
//! so it is never mistaken for a validation failure.

use thiserror::Error;

/// Errors from the progress simulation
#[derive(Error, Debug)]
pub enum ProgressError {
    /// The total number of units is zero
    #[error("total must be greater than zero")]
    InvalidTotal,

    /// The chunk size is zero
    #[error("chunk must be greater than zero")]
    InvalidChunk,

    /// The run was cancelled before completion
    #[error("progress run cancelled")]
    Cancelled,

    /// Writing to the output sink failed
    #[error("failed to write progress output")]
    Io(#[from] std::io::Error),
}

/// Errors from the interactive survey
#[derive(Error, Debug)]
pub enum SurveyError {
    /// The survey was cancelled before completion
    #[error("survey cancelled")]
    Cancelled,

    /// Reading a response or echoing a prompt failed
    #[error("failed to read survey response")]
    Io(#[from] std::io::Error),

    /// An interactive prompt widget failed
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    /// The form task terminated abnormally
    #[error("form execution failed: {0}")]
    Execution(String),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Progress simulation error
    #[error(transparent)]
    Progress(#[from] ProgressError),

    /// Survey error
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Check whether the error is a cooperative cancellation rather than a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            AppError::Progress(ProgressError::Cancelled) | AppError::Survey(SurveyError::Cancelled)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Progress(_) => "progress",
            AppError::Survey(_) => "survey",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Progress result type alias
pub type ProgressResult<T> = std::result::Result<T, ProgressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_fixed() {
        assert_eq!(
            ProgressError::InvalidTotal.to_string(),
            "total must be greater than zero"
        );
        assert_eq!(
            ProgressError::InvalidChunk.to_string(),
            "chunk must be greater than zero"
        );
    }

    #[test]
    fn cancellation_is_distinguishable() {
        let err = AppError::from(ProgressError::Cancelled);
        assert!(err.is_cancellation());
        assert_eq!(err.category(), "progress");

        let err = AppError::from(ProgressError::InvalidTotal);
        assert!(!err.is_cancellation());

        let err = AppError::from(SurveyError::Cancelled);
        assert!(err.is_cancellation());
        assert_eq!(err.category(), "survey");
    }
}
