//! The package manifest, derived from the project descriptor.
//!
//! Dependencies, scripts and formatter preferences all live in
//! `package.json`; the formatter reads its settings from the `prettier` key.

use serde_json::{Map, Value, json};

use crate::domain::{
    components::Component,
    entities::{artifact::Artifact, descriptor::ProjectDescriptor},
    error::DomainError,
    value_objects::Dependency,
};

pub const MANIFEST_PATH: &str = "package.json";
const DEFAULT_LICENSE: &str = "Apache-2.0";
const UNLICENSED: &str = "UNLICENSED";

#[derive(Debug, Clone)]
pub struct PackageManifest {
    descriptor: ProjectDescriptor,
}

impl PackageManifest {
    pub const NAME: &'static str = "package-manifest";

    pub fn new(descriptor: ProjectDescriptor) -> Self {
        Self { descriptor }
    }

    fn to_json(&self) -> Value {
        let d = &self.descriptor;
        let mut manifest = Map::new();

        manifest.insert("name".into(), json!(d.package_name()));
        manifest.insert("description".into(), json!(d.description()));
        manifest.insert(
            "license".into(),
            json!(if d.licensed() {
                DEFAULT_LICENSE
            } else {
                UNLICENSED
            }),
        );
        if !d.scripts().is_empty() {
            manifest.insert("scripts".into(), json!(d.scripts()));
        }
        if !d.dependencies().is_empty() {
            manifest.insert("dependencies".into(), dependency_map(d.dependencies()));
        }
        if !d.dev_dependencies().is_empty() {
            manifest.insert(
                "devDependencies".into(),
                dependency_map(d.dev_dependencies()),
            );
        }
        manifest.insert("prettier".into(), d.formatting().to_formatter_json());

        Value::Object(manifest)
    }
}

fn dependency_map(deps: &[Dependency]) -> Value {
    Value::Object(
        deps.iter()
            .map(|d| (d.name().to_string(), json!(d.version_req())))
            .collect(),
    )
}

impl Component for PackageManifest {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn artifacts(&self) -> Result<Vec<Artifact>, DomainError> {
        Ok(vec![Artifact::json(MANIFEST_PATH, self.to_json())?])
    }
}
