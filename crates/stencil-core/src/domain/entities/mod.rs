pub mod artifact;
pub mod common;
pub mod descriptor;
pub mod project;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactContent};
pub use descriptor::{ProjectDescriptor, ProjectDescriptorBuilder, ProjectOptions};
pub use project::Project;
pub use project_structure::{FileToWrite, ProjectStructure};
