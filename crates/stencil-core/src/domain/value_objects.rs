//! Domain value objects: Dependency and the formatter preference record.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. This
//! file's only job is to define the types, their string representations, and
//! their `FromStr` parsers. Validation of package names lives in
//! `validation.rs`.

use crate::domain::{error::DomainError, validation::DomainValidator};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

// ── Dependency ───────────────────────────────────────────────────────────────

/// A declared package dependency, written `name@version`.
///
/// Scoped names keep their leading `@` (`@types/aws-lambda@8.10.93`). The
/// version is everything after the first `@` that follows the name, so
/// aliases (`lodash4@npm:lodash@4.17.21`) and git URLs pass through
/// untouched. A dependency without a version renders as `*` in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dependency {
    name: String,
    version: Option<String>,
}

impl Dependency {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Version requirement as written into `package.json`.
    pub fn version_req(&self) -> &str {
        self.version.as_deref().unwrap_or("*")
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for Dependency {
    type Err = DomainError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidDependency {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        if spec.is_empty() {
            return Err(invalid("empty dependency"));
        }
        if spec.chars().any(char::is_whitespace) {
            return Err(invalid("whitespace is not allowed"));
        }

        // A leading '@' belongs to the scope.
        let (name, version) = match spec.char_indices().skip(1).find(|&(_, c)| c == '@') {
            Some((i, _)) => (&spec[..i], Some(&spec[i + 1..])),
            None => (spec, None),
        };

        if version.is_some_and(str::is_empty) {
            return Err(invalid("version after '@' is empty"));
        }

        DomainValidator::validate_dependency_name(name).map_err(|e| match e {
            DomainError::InvalidPackageName { reason, .. } => invalid(&reason),
            other => other,
        })?;

        Ok(Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }
}

impl TryFrom<String> for Dependency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dependency> for String {
    fn from(dep: Dependency) -> Self {
        dep.to_string()
    }
}

// ── Formatter enums ──────────────────────────────────────────────────────────

/// Parentheses around a sole arrow-function parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowParens {
    #[default]
    Always,
    Avoid,
}

impl ArrowParens {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Avoid => "avoid",
        }
    }
}

/// Line ending written by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl EndOfLine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
            Self::Cr => "cr",
            Self::Auto => "auto",
        }
    }
}

/// When object property names get quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteProps {
    #[default]
    AsNeeded,
    Consistent,
    Preserve,
}

impl QuoteProps {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AsNeeded => "as-needed",
            Self::Consistent => "consistent",
            Self::Preserve => "preserve",
        }
    }
}

/// Trailing commas in multi-line literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingComma {
    #[default]
    Es5,
    None,
    All,
}

impl TrailingComma {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Es5 => "es5",
            Self::None => "none",
            Self::All => "all",
        }
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ident => [$($variant:ident),+]),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.to_ascii_lowercase();
                $(
                    if lower == Self::$variant.as_str() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(DomainError::InvalidOption {
                    field: stringify!($ty),
                    reason: format!("unknown value '{s}'"),
                })
            }
        }
    )+};
}

impl_display_from_str! {
    ArrowParens => [Always, Avoid],
    EndOfLine => [Lf, Crlf, Cr, Auto],
    QuoteProps => [AsNeeded, Consistent, Preserve],
    TrailingComma => [Es5, None, All],
}

// ── FormattingPreferences ────────────────────────────────────────────────────

/// Formatter settings carried by the package manifest.
///
/// Field names are snake_case in configuration files and camelCase in the
/// emitted formatter config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingPreferences {
    pub arrow_parens: ArrowParens,
    pub bracket_same_line: bool,
    pub end_of_line: EndOfLine,
    pub print_width: u16,
    pub quote_props: QuoteProps,
    pub semi: bool,
    pub single_quote: bool,
    pub tab_width: u8,
    pub trailing_comma: TrailingComma,
    pub use_tabs: bool,
}

impl Default for FormattingPreferences {
    fn default() -> Self {
        Self {
            arrow_parens: ArrowParens::Always,
            bracket_same_line: false,
            end_of_line: EndOfLine::Lf,
            print_width: 80,
            quote_props: QuoteProps::AsNeeded,
            semi: true,
            single_quote: true,
            tab_width: 2,
            trailing_comma: TrailingComma::Es5,
            use_tabs: false,
        }
    }
}

impl FormattingPreferences {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.print_width == 0 {
            return Err(DomainError::InvalidOption {
                field: "formatting.print_width",
                reason: "must be greater than zero".into(),
            });
        }
        if self.tab_width == 0 {
            return Err(DomainError::InvalidOption {
                field: "formatting.tab_width",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// The preferences in the formatter's own configuration shape.
    pub fn to_formatter_json(&self) -> Value {
        json!({
            "arrowParens": self.arrow_parens.as_str(),
            "bracketSameLine": self.bracket_same_line,
            "endOfLine": self.end_of_line.as_str(),
            "printWidth": self.print_width,
            "quoteProps": self.quote_props.as_str(),
            "semi": self.semi,
            "singleQuote": self.single_quote,
            "tabWidth": self.tab_width,
            "trailingComma": self.trailing_comma.as_str(),
            "useTabs": self.use_tabs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dependency() {
        let dep: Dependency = "lambda-log@3.1.0".parse().unwrap();
        assert_eq!(dep.name(), "lambda-log");
        assert_eq!(dep.version(), Some("3.1.0"));
        assert_eq!(dep.to_string(), "lambda-log@3.1.0");
    }

    #[test]
    fn parses_scoped_dependency() {
        let dep: Dependency = "@commitlint/config-conventional@16.2.1".parse().unwrap();
        assert_eq!(dep.name(), "@commitlint/config-conventional");
        assert_eq!(dep.version(), Some("16.2.1"));
    }

    #[test]
    fn unversioned_dependency_renders_wildcard() {
        let dep: Dependency = "@types/node".parse().unwrap();
        assert_eq!(dep.name(), "@types/node");
        assert_eq!(dep.version(), None);
        assert_eq!(dep.version_req(), "*");
    }

    #[test]
    fn rejects_malformed_dependencies() {
        for spec in ["", "jest@", "je st@1.0.0", "@scope-only", "@@1.0.0", "a/b@1.0.0"] {
            assert!(
                spec.parse::<Dependency>().is_err(),
                "expected '{spec}' to be rejected"
            );
        }
    }

    #[test]
    fn version_is_everything_after_the_name() {
        let alias: Dependency = "lodash4@npm:lodash@4.17.21".parse().unwrap();
        assert_eq!(alias.name(), "lodash4");
        assert_eq!(alias.version(), Some("npm:lodash@4.17.21"));

        let git: Dependency = "foo@git+ssh://git@github.com/a/b.git".parse().unwrap();
        assert_eq!(git.name(), "foo");
        assert_eq!(git.version(), Some("git+ssh://git@github.com/a/b.git"));

        let scoped: Dependency = "@scope/pkg@npm:@other/pkg@2.0.0".parse().unwrap();
        assert_eq!(scoped.name(), "@scope/pkg");
        assert_eq!(scoped.version(), Some("npm:@other/pkg@2.0.0"));
    }

    #[test]
    fn legacy_uppercase_names_are_accepted() {
        let dep: Dependency = "JSONStream@1.3.5".parse().unwrap();
        assert_eq!(dep.name(), "JSONStream");
        assert_eq!(dep.to_string(), "JSONStream@1.3.5");
    }

    #[test]
    fn dependency_deserializes_from_string() {
        let dep: Dependency = serde_json::from_str("\"husky@7.0.4\"").unwrap();
        assert_eq!(dep.name(), "husky");
        assert!(serde_json::from_str::<Dependency>("\"husky@\"").is_err());
    }

    #[test]
    fn formatter_enums_round_trip_through_strings() {
        assert_eq!("as-needed".parse::<QuoteProps>().unwrap(), QuoteProps::AsNeeded);
        assert_eq!("ES5".parse::<TrailingComma>().unwrap(), TrailingComma::Es5);
        assert_eq!(EndOfLine::Crlf.to_string(), "crlf");
        assert!("sometimes".parse::<ArrowParens>().is_err());
    }

    #[test]
    fn default_preferences_match_formatter_json() {
        let json = FormattingPreferences::default().to_formatter_json();
        assert_eq!(json["arrowParens"], "always");
        assert_eq!(json["endOfLine"], "lf");
        assert_eq!(json["printWidth"], 80);
        assert_eq!(json["quoteProps"], "as-needed");
        assert_eq!(json["singleQuote"], true);
        assert_eq!(json["tabWidth"], 2);
        assert_eq!(json["trailingComma"], "es5");
        assert_eq!(json["useTabs"], false);
    }

    #[test]
    fn zero_widths_are_rejected() {
        let prefs = FormattingPreferences {
            print_width: 0,
            ..Default::default()
        };
        assert!(prefs.validate().is_err());

        let prefs = FormattingPreferences {
            tab_width: 0,
            ..Default::default()
        };
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn preferences_deserialize_with_partial_fields() {
        let prefs: FormattingPreferences =
            serde_json::from_str(r#"{"print_width": 100, "trailing_comma": "all"}"#).unwrap();
        assert_eq!(prefs.print_width, 100);
        assert_eq!(prefs.trailing_comma, TrailingComma::All);
        assert!(prefs.single_quote);
    }
}
