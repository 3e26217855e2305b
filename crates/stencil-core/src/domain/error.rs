// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Option Validation Errors
    // ========================================================================
    #[error("Invalid option '{field}': {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Invalid dependency '{spec}': {reason}")]
    InvalidDependency { spec: String, reason: String },

    #[error("Dependency '{name}' declared more than once in {list}")]
    DuplicateDependency { name: String, list: &'static str },

    // ========================================================================
    // Artifact Errors
    // ========================================================================
    #[error("Invalid artifact path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid content for '{path}': {reason}")]
    InvalidContent { path: String, reason: String },

    // ========================================================================
    // Composition Errors
    // ========================================================================
    #[error("Path '{path}' claimed by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("Component '{name}' is already part of the project")]
    DuplicateComponent { name: String },

    #[error("Unknown component '{name}'")]
    UnknownComponent { name: String },

    #[error("Project has no components to synthesize")]
    EmptyProject,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption { field, .. } | Self::MissingRequiredField { field } => vec![
                format!("Check the '{}' option in your configuration", field),
                "Run: stencil config list to see the effective configuration".into(),
            ],
            Self::InvalidPackageName { .. } => vec![
                "Package names must be lowercase and URL-safe".into(),
                "They may not start with '.' or '_' and are limited to 214 characters".into(),
                "Examples: lambda-starter, @acme/orders-handler".into(),
            ],
            Self::InvalidDependency { .. } => vec![
                "Dependencies are written as name@version, e.g. lambda-log@3.1.0".into(),
                "Scoped packages keep their leading '@': @types/aws-lambda@8.10.93".into(),
            ],
            Self::DuplicateDependency { name, list } => vec![
                format!("Remove one of the '{}' entries from {}", name, list),
            ],
            Self::DuplicatePath { path, .. } => vec![
                format!("Only one component may write '{}'", path),
                "Drop one of them with: stencil synth --without <component>".into(),
            ],
            Self::UnknownComponent { .. } => {
                vec!["Run: stencil components to list available components".into()]
            }
            Self::EmptyProject => vec!["Keep at least one component in the composition".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidPackageName { .. }
            | Self::InvalidDependency { .. }
            | Self::DuplicateDependency { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::DuplicateComponent { .. } | Self::EmptyProject => {
                ErrorCategory::Conflict
            }
            Self::UnknownComponent { .. } => ErrorCategory::NotFound,
            Self::InvalidPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::InvalidContent { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
