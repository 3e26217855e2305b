//! Components: named producers of artifacts.
//!
//! A project is an explicit, ordered list of components. Each component owns
//! the artifacts it produces and never looks at another component's output,
//! so removing one leaves every other file byte-for-byte unchanged.
//!
//! Most components are [`StaticComponent`]s: a name plus a table of
//! [`FileSpec`]s whose content is literal. The package manifest is the one
//! component derived from the descriptor (see [`manifest`]).

pub mod catalog;
pub mod manifest;

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::{entities::artifact::Artifact, error::DomainError};

pub use catalog::{
    COMMIT_LINT, ESLINT_IGNORE, HUSKY, LINT_STAGED, PRETTIER_IGNORE, STATIC_COMPONENTS, VSCODE,
};
pub use manifest::PackageManifest;

/// Anything that contributes files to a project.
pub trait Component: fmt::Debug + Send + Sync {
    /// Stable identifier, unique within a project.
    fn name(&self) -> &str;

    /// The artifacts this component emits, in order.
    fn artifacts(&self) -> Result<Vec<Artifact>, DomainError>;
}

// ── Literal payloads ─────────────────────────────────────────────────────────

/// A scalar value inside a structured payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    Str(&'static str),
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Str(s) => Value::String(s.to_string()),
        }
    }
}

/// Literal content known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Lines(&'static [&'static str]),
    Object(&'static [(&'static str, Literal)]),
}

/// One file of a static component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    pub path: &'static str,
    pub payload: Payload,
    pub executable: bool,
}

impl FileSpec {
    pub const fn text(path: &'static str, lines: &'static [&'static str]) -> Self {
        Self {
            path,
            payload: Payload::Lines(lines),
            executable: false,
        }
    }

    pub const fn object(path: &'static str, entries: &'static [(&'static str, Literal)]) -> Self {
        Self {
            path,
            payload: Payload::Object(entries),
            executable: false,
        }
    }

    pub const fn executable(self) -> Self {
        Self {
            executable: true,
            ..self
        }
    }

    pub fn to_artifact(&self) -> Result<Artifact, DomainError> {
        let artifact = match self.payload {
            Payload::Lines(lines) => Artifact::text(self.path, lines.iter().copied())?,
            Payload::Object(entries) => {
                let object: Map<String, Value> = entries
                    .iter()
                    .map(|(key, value)| (key.to_string(), Value::from(*value)))
                    .collect();
                Artifact::json(self.path, Value::Object(object))?
            }
        };

        Ok(if self.executable {
            artifact.executable()
        } else {
            artifact
        })
    }
}

/// A component whose files are all literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticComponent {
    name: &'static str,
    files: &'static [FileSpec],
}

impl StaticComponent {
    pub const fn new(name: &'static str, files: &'static [FileSpec]) -> Self {
        Self { name, files }
    }

    pub const fn files(&self) -> &'static [FileSpec] {
        self.files
    }
}

impl Component for StaticComponent {
    fn name(&self) -> &str {
        self.name
    }

    fn artifacts(&self) -> Result<Vec<Artifact>, DomainError> {
        self.files.iter().map(FileSpec::to_artifact).collect()
    }
}
