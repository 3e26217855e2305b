//! The `Project` aggregate: a descriptor plus an explicit component list.
//!
//! Composition is plain data. Components are held in the order they were
//! added and rendered in that order; nothing registers itself anywhere.

use std::fmt;

use crate::domain::{
    components::{Component, PackageManifest, STATIC_COMPONENTS},
    entities::{descriptor::ProjectDescriptor, project_structure::ProjectStructure},
    error::DomainError,
};

pub struct Project {
    descriptor: ProjectDescriptor,
    components: Vec<Box<dyn Component>>,
}

impl Project {
    /// A project with no components.
    pub fn new(descriptor: ProjectDescriptor) -> Self {
        Self {
            descriptor,
            components: Vec::new(),
        }
    }

    /// The Lambda starter: package manifest followed by the tooling
    /// components (commit lint, lint ignore, hooks, staged-file config,
    /// formatter ignore, editor settings).
    pub fn lambda_starter(descriptor: ProjectDescriptor) -> Self {
        let mut components: Vec<Box<dyn Component>> =
            vec![Box::new(PackageManifest::new(descriptor.clone()))];
        components.extend(
            STATIC_COMPONENTS
                .iter()
                .map(|c| Box::new(*c) as Box<dyn Component>),
        );

        Self {
            descriptor,
            components,
        }
    }

    pub fn with_component(mut self, component: Box<dyn Component>) -> Result<Self, DomainError> {
        if self.position(component.name()).is_some() {
            return Err(DomainError::DuplicateComponent {
                name: component.name().to_string(),
            });
        }
        self.components.push(component);
        Ok(self)
    }

    pub fn without_component(mut self, name: &str) -> Result<Self, DomainError> {
        let index = self
            .position(name)
            .ok_or_else(|| DomainError::UnknownComponent {
                name: name.to_string(),
            })?;
        self.components.remove(index);
        Ok(self)
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Render every component into a validated file set.
    pub fn synthesize(&self) -> Result<ProjectStructure, DomainError> {
        let mut structure = ProjectStructure::new();

        for component in &self.components {
            for artifact in component.artifacts()? {
                let content = artifact.render()?;
                structure.add_file(
                    component.name(),
                    artifact.path().clone(),
                    content,
                    artifact.permissions(),
                );
            }
        }

        structure.validate()?;
        Ok(structure)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name() == name)
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("package_name", &self.descriptor.package_name())
            .field("components", &self.component_names())
            .finish()
    }
}
