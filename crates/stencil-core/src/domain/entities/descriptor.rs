//! The project descriptor: identity, dependencies, scripts and formatting.
//!
//! [`ProjectOptions`] is the loose configuration record as it arrives from a
//! config file or the command line. [`ProjectDescriptor`] is its validated,
//! immutable form. Every malformed option is rejected when the descriptor is
//! built, before any artifact is rendered or any file is touched.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{Dependency, FormattingPreferences},
};

pub const STARTER_DEPENDENCIES: &[&str] = &["lambda-log@3.1.0"];

pub const STARTER_DEV_DEPENDENCIES: &[&str] = &[
    "@commitlint/cli@16.2.3",
    "@commitlint/config-conventional@16.2.1",
    "@types/aws-lambda@8.10.93",
    "@types/jake@0.0.33",
    "@types/lambda-log@2.2.1",
    "husky@7.0.4",
    "jake@10.8.4",
    "lint-staged@11.2.6",
    "eslint",
    "jest",
    "prettier",
    "typescript",
];

pub const STARTER_SCRIPTS: &[(&str, &str)] = &[
    ("build", "tsc"),
    ("prepare", "husky install"),
    ("test", "jest"),
];

// ── Options (configuration record) ───────────────────────────────────────────

/// Recognized project options, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    pub description: String,
    pub package_name: String,
    /// Display label for logs and headers; defaults to the package name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub scripts: BTreeMap<String, String>,
    pub formatting: FormattingPreferences,
    pub licensed: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            description: String::new(),
            package_name: String::new(),
            name: None,
            dependencies: STARTER_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            dev_dependencies: STARTER_DEV_DEPENDENCIES
                .iter()
                .map(|d| d.to_string())
                .collect(),
            scripts: STARTER_SCRIPTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            formatting: FormattingPreferences::default(),
            licensed: false,
        }
    }
}

impl ProjectOptions {
    /// Starter defaults with the two required identity fields set.
    pub fn new(description: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            package_name: package_name.into(),
            ..Self::default()
        }
    }
}

// ── Descriptor ───────────────────────────────────────────────────────────────

/// A validated project description. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    package_name: String,
    description: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
    scripts: BTreeMap<String, String>,
    formatting: FormattingPreferences,
    licensed: bool,
}

impl ProjectDescriptor {
    pub fn builder() -> ProjectDescriptorBuilder {
        ProjectDescriptorBuilder::default()
    }

    /// Validate a configuration record into a descriptor.
    pub fn from_options(options: ProjectOptions) -> Result<Self, DomainError> {
        let mut builder = Self::builder()
            .description(options.description)
            .package_name(options.package_name)
            .formatting(options.formatting)
            .licensed(options.licensed);
        if let Some(name) = options.name {
            builder = builder.name(name);
        }
        for dep in options.dependencies {
            builder = builder.dependency(dep);
        }
        for dep in options.dev_dependencies {
            builder = builder.dev_dependency(dep);
        }
        for (name, command) in options.scripts {
            builder = builder.script(name, command);
        }
        builder.build()
    }

    /// Display label for logs and command output. Never written into an
    /// artifact; `package.json` uses [`Self::package_name`].
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
    pub fn dev_dependencies(&self) -> &[Dependency] {
        &self.dev_dependencies
    }
    pub fn scripts(&self) -> &BTreeMap<String, String> {
        &self.scripts
    }
    pub fn formatting(&self) -> &FormattingPreferences {
        &self.formatting
    }
    pub const fn licensed(&self) -> bool {
        self.licensed
    }

    /// Re-check every invariant. Called by the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "description",
            });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        DomainValidator::validate_package_name(&self.package_name)?;

        check_unique(&self.dependencies, "dependencies")?;
        check_unique(&self.dev_dependencies, "dev_dependencies")?;

        for (name, command) in &self.scripts {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidOption {
                    field: "scripts",
                    reason: "script names cannot be empty".into(),
                });
            }
            if command.trim().is_empty() {
                return Err(DomainError::InvalidOption {
                    field: "scripts",
                    reason: format!("script '{name}' has an empty command"),
                });
            }
        }

        self.formatting.validate()
    }
}

fn check_unique(deps: &[Dependency], list: &'static str) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for dep in deps {
        if !seen.insert(dep.name()) {
            return Err(DomainError::DuplicateDependency {
                name: dep.name().to_string(),
                list,
            });
        }
    }
    Ok(())
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`ProjectDescriptor`].
///
/// Dependency specs are kept as strings until `build()` so that every error
/// surfaces from one place.
#[derive(Debug, Default)]
pub struct ProjectDescriptorBuilder {
    name: Option<String>,
    package_name: Option<String>,
    description: Option<String>,
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
    scripts: BTreeMap<String, String>,
    formatting: FormattingPreferences,
    licensed: bool,
}

impl ProjectDescriptorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn dependency(mut self, spec: impl Into<String>) -> Self {
        self.dependencies.push(spec.into());
        self
    }

    pub fn dev_dependency(mut self, spec: impl Into<String>) -> Self {
        self.dev_dependencies.push(spec.into());
        self
    }

    pub fn script(mut self, name: impl Into<String>, command: impl Into<String>) -> Self {
        self.scripts.insert(name.into(), command.into());
        self
    }

    pub fn formatting(mut self, formatting: FormattingPreferences) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn licensed(mut self, licensed: bool) -> Self {
        self.licensed = licensed;
        self
    }

    pub fn build(self) -> Result<ProjectDescriptor, DomainError> {
        let package_name = self
            .package_name
            .filter(|p| !p.is_empty())
            .ok_or(DomainError::MissingRequiredField {
                field: "package_name",
            })?;
        let description = self.description.ok_or(DomainError::MissingRequiredField {
            field: "description",
        })?;

        let descriptor = ProjectDescriptor {
            name: self.name.unwrap_or_else(|| package_name.clone()),
            package_name,
            description,
            dependencies: parse_all(self.dependencies)?,
            dev_dependencies: parse_all(self.dev_dependencies)?,
            scripts: self.scripts,
            formatting: self.formatting,
            licensed: self.licensed,
        };

        descriptor.validate()?;
        Ok(descriptor)
    }
}

fn parse_all(specs: Vec<String>) -> Result<Vec<Dependency>, DomainError> {
    specs.iter().map(|s| s.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_options_use_starter_defaults() {
        let descriptor = ProjectDescriptor::from_options(ProjectOptions::new("x", "y")).unwrap();

        assert_eq!(descriptor.description(), "x");
        assert_eq!(descriptor.package_name(), "y");
        assert_eq!(descriptor.name(), "y");
        assert_eq!(descriptor.dependencies().len(), 1);
        assert_eq!(descriptor.dependencies()[0].name(), "lambda-log");
        assert!(
            descriptor
                .dev_dependencies()
                .iter()
                .any(|d| d.name() == "husky" && d.version() == Some("7.0.4"))
        );
        assert_eq!(
            descriptor.scripts().get("prepare").map(String::as_str),
            Some("husky install")
        );
        assert!(!descriptor.licensed());
    }

    #[test]
    fn explicit_name_overrides_package_name() {
        let descriptor = ProjectDescriptor::builder()
            .description("Orders handler")
            .package_name("@acme/orders")
            .name("orders")
            .build()
            .unwrap();
        assert_eq!(descriptor.name(), "orders");
        assert_eq!(descriptor.package_name(), "@acme/orders");
    }

    #[test]
    fn missing_identity_fails_fast() {
        assert!(matches!(
            ProjectDescriptor::builder().description("x").build(),
            Err(DomainError::MissingRequiredField {
                field: "package_name"
            })
        ));
        assert!(matches!(
            ProjectDescriptor::from_options(ProjectOptions::new("   ", "pkg")),
            Err(DomainError::MissingRequiredField {
                field: "description"
            })
        ));
    }

    #[test]
    fn invalid_package_name_is_rejected() {
        assert!(matches!(
            ProjectDescriptor::from_options(ProjectOptions::new("x", "Not Valid")),
            Err(DomainError::InvalidPackageName { .. })
        ));
    }

    #[test]
    fn malformed_dependency_is_rejected() {
        let mut options = ProjectOptions::new("x", "y");
        options.dependencies.push("broken@".into());
        assert!(matches!(
            ProjectDescriptor::from_options(options),
            Err(DomainError::InvalidDependency { .. })
        ));
    }

    #[test]
    fn duplicate_dependency_is_rejected() {
        let mut options = ProjectOptions::new("x", "y");
        options.dev_dependencies.push("husky@8.0.0".into());
        assert!(matches!(
            ProjectDescriptor::from_options(options),
            Err(DomainError::DuplicateDependency {
                list: "dev_dependencies",
                ..
            })
        ));
    }

    #[test]
    fn empty_script_command_is_rejected() {
        let result = ProjectDescriptor::builder()
            .description("x")
            .package_name("y")
            .script("lint", " ")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidOption { .. })));
    }

    #[test]
    fn options_deserialize_from_partial_json() {
        let options: ProjectOptions = serde_json::from_str(
            r#"{"description": "d", "package_name": "p", "formatting": {"semi": false}}"#,
        )
        .unwrap();
        assert_eq!(options.dependencies, vec!["lambda-log@3.1.0".to_string()]);
        assert!(!options.formatting.semi);
        assert!(ProjectDescriptor::from_options(options).is_ok());
    }
}
