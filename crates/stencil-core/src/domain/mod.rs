// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stencil.
//!
//! This module contains the pure description of the generated project: the
//! validated descriptor, the artifacts, the components that produce them and
//! the composition that renders them into a [`ProjectStructure`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Writing files is the application layer's job, through ports
//! - **Immutable entities**: Descriptors and artifacts never change once built
//! - **Explicit composition**: A project owns an ordered component list
//!
// Public API - what the world sees
pub mod components;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use components::{Component, FileSpec, Literal, PackageManifest, Payload, StaticComponent};
pub use entities::{
    artifact::{Artifact, ArtifactContent},
    descriptor::{ProjectDescriptor, ProjectDescriptorBuilder, ProjectOptions},
    project::Project,
    project_structure::{FileToWrite, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ArrowParens, Dependency, EndOfLine, FormattingPreferences, QuoteProps, TrailingComma,
};

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;
