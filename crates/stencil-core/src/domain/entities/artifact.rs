//! A single file the generator emits.
//!
//! An artifact is a target path plus fully-resolved content. Rendering is a
//! pure function of the artifact, so two runs with the same input produce
//! byte-identical files.

use serde_json::Value;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// Payload of an artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactContent {
    /// Text lines joined with `\n`. No newline is appended after the last
    /// line; a line that must end the file with a newline carries it.
    Lines(Vec<String>),
    /// A JSON object, written with sorted keys and two-space indentation.
    Json(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    path: RelativePath,
    content: ArtifactContent,
    permissions: Permissions,
}

impl Artifact {
    pub fn text<I, S>(path: &str, lines: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content: ArtifactContent::Lines(lines.into_iter().map(Into::into).collect()),
            permissions: Permissions::default(),
        })
    }

    pub fn json(path: &str, value: Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::InvalidContent {
                path: path.to_string(),
                reason: "structured content must be a JSON object".into(),
            });
        }
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content: ArtifactContent::Json(value),
            permissions: Permissions::default(),
        })
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn executable(self) -> Self {
        self.with_permissions(Permissions::executable())
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Serialize the content to the exact text written to disk.
    pub fn render(&self) -> Result<String, DomainError> {
        match &self.content {
            ArtifactContent::Lines(lines) => Ok(lines.join("\n")),
            ArtifactContent::Json(value) => {
                let mut out = serde_json::to_string_pretty(&canonicalize(value)).map_err(|e| {
                    DomainError::InvalidContent {
                        path: self.path.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// Rebuild a value with every object's keys in sorted order, independent of
/// how `serde_json::Map` is backed in the final build.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            Value::Object(
                keys.into_iter()
                    .map(|k| (k.clone(), canonicalize(&map[k])))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lines_are_joined_without_implicit_trailing_newline() {
        let artifact = Artifact::text(".eslintignore", ["lib", "node_modules"]).unwrap();
        assert_eq!(artifact.render().unwrap(), "lib\nnode_modules");

        let artifact = Artifact::text(".husky/.gitignore", ["_\n"]).unwrap();
        assert_eq!(artifact.render().unwrap(), "_\n");
    }

    #[test]
    fn json_is_written_with_sorted_keys() {
        let artifact = Artifact::json("settings.json", json!({"b": 1, "a": {"d": true, "c": "x"}}))
            .unwrap();
        assert_eq!(
            artifact.render().unwrap(),
            "{\n  \"a\": {\n    \"c\": \"x\",\n    \"d\": true\n  },\n  \"b\": 1\n}\n"
        );
    }

    #[test]
    fn json_content_must_be_an_object() {
        assert!(matches!(
            Artifact::json("list.json", json!([1, 2])),
            Err(DomainError::InvalidContent { .. })
        ));
    }

    #[test]
    fn default_permissions_are_read_only() {
        let artifact = Artifact::text("a.txt", ["a"]).unwrap();
        assert_eq!(artifact.permissions(), Permissions::read_only());
        assert!(artifact.executable().permissions().executable_flag());
    }

    #[test]
    fn rejects_invalid_paths() {
        assert!(Artifact::text("", ["x"]).is_err());
        assert!(Artifact::text("/abs", ["x"]).is_err());
        assert!(Artifact::json("../up.json", json!({})).is_err());
    }
}
