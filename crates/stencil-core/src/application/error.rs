//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while writing or checking a synthesized project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking writer.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,

    /// Output root exists but is not a directory.
    #[error("Output root {path} is not a directory")]
    InvalidRoot { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files from an earlier run may have been made read-only by another tool".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug in a test adapter".into()],
            Self::InvalidRoot { path } => vec![
                format!("'{}' exists and is a file", path.display()),
                "Choose a directory as the output root".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::InvalidRoot { .. } => ErrorCategory::Validation,
        }
    }
}
