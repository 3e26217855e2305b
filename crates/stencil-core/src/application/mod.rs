//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`SynthService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CheckReport, CheckedFile, FileOutcome, FileStatus, SynthReport, SynthService, WrittenFile,
};

pub use ports::Filesystem;

pub use error::ApplicationError;
