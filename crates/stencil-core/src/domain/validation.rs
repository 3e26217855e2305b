use crate::domain::{entities::ProjectStructure, error::DomainError};

const MAX_PACKAGE_NAME_LEN: usize = 214;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    /// Check a name against the package registry naming rules.
    ///
    /// Names are lowercase, URL-safe, at most 214 characters, never start
    /// with `.` or `_`, and may carry a single `@scope/` prefix.
    pub fn validate_package_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| {
            Err(DomainError::InvalidPackageName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return invalid("name cannot be empty");
        }
        if name.len() > MAX_PACKAGE_NAME_LEN {
            return invalid("name cannot be longer than 214 characters");
        }
        if name.starts_with('.') || name.starts_with('_') {
            return invalid("name cannot start with '.' or '_'");
        }
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return invalid("name must be lowercase");
        }

        let segments: Vec<&str> = match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, package)) => vec![scope, package],
                None => return invalid("scoped names must look like @scope/name"),
            },
            None => vec![name],
        };

        for segment in segments {
            if segment.is_empty() {
                return invalid("scope and package parts cannot be empty");
            }
            if !segment.chars().all(is_url_safe) {
                return invalid("name may only contain a-z, 0-9, '-', '.', '_' and '~'");
            }
        }

        Ok(())
    }

    /// Check the name half of a dependency spec.
    ///
    /// Looser than [`Self::validate_package_name`]: the registry still serves
    /// legacy names with uppercase letters, so only the shape is checked.
    pub fn validate_dependency_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| {
            Err(DomainError::InvalidPackageName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return invalid("name cannot be empty");
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return invalid("name cannot contain whitespace");
        }

        match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, package))
                    if !scope.is_empty() && !package.is_empty() && !package.contains('/') =>
                {
                    Ok(())
                }
                _ => invalid("scoped names must look like @scope/name"),
            },
            None if name.contains('/') => invalid("only scoped names may contain '/'"),
            None => Ok(()),
        }
    }
}

fn is_url_safe(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_registry_names() {
        for name in [
            "lambda-starter",
            "husky",
            "@types/aws-lambda",
            "@commitlint/config-conventional",
            "a.b_c~d",
        ] {
            assert!(
                DomainValidator::validate_package_name(name).is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn rejects_bad_names() {
        let long = "a".repeat(MAX_PACKAGE_NAME_LEN + 1);
        for name in [
            "",
            ".hidden",
            "_private",
            "Lambda",
            "has space",
            "@scope",
            "@/pkg",
            "@scope/",
            "a/b",
            long.as_str(),
        ] {
            assert!(
                matches!(
                    DomainValidator::validate_package_name(name),
                    Err(DomainError::InvalidPackageName { .. })
                ),
                "expected rejection for: {name}"
            );
        }
    }

    #[test]
    fn dependency_names_allow_legacy_casing() {
        for name in ["JSONStream", "lodash4", "@Types/Node"] {
            assert!(
                DomainValidator::validate_dependency_name(name).is_ok(),
                "failed for: {name}"
            );
        }
        for name in ["", "@", "@scope", "@scope/", "@/pkg", "a/b", "@a/b/c"] {
            assert!(
                DomainValidator::validate_dependency_name(name).is_err(),
                "expected rejection for: {name}"
            );
        }
    }
}
