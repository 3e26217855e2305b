//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stencil
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (SynthService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectDescriptor, Component, Project) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::{
//!     application::SynthService,
//!     domain::{Project, ProjectDescriptor},
//! };
//! # fn demo(filesystem: Box<dyn stencil_core::application::Filesystem>) -> stencil_core::error::StencilResult<()> {
//!
//! let descriptor = ProjectDescriptor::builder()
//!     .description("Order intake lambda")
//!     .package_name("order-intake")
//!     .build()?;
//!
//! let project = Project::lambda_starter(descriptor);
//! let report = SynthService::new(filesystem).synthesize(&project, "./order-intake")?;
//! println!("{} files", report.files.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Commonly used types.
pub mod prelude {
    pub use crate::application::{
        CheckReport, FileOutcome, FileStatus, SynthReport, SynthService, ports::Filesystem,
    };
    pub use crate::domain::{
        Component, Dependency, FormattingPreferences, Permissions, Project, ProjectDescriptor,
        ProjectOptions, ProjectStructure,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
