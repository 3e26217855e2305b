//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the `project` section as
//! [`ProjectOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command handlers)
//! 2. Environment variables: `STENCIL__SECTION__KEY`
//! 3. `--config FILE` (must exist)
//! 4. `.stencil.toml` in the current directory
//! 5. Global `config.toml` in the user configuration directory
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stencil_core::domain::ProjectOptions;
use tracing::debug;

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stencil.toml";

const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Options for the generated project.
    pub project: ProjectOptions,
    /// Output settings.
    pub output: OutputConfig,
    /// Synthesis settings.
    pub synth: SynthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Mark generated files read-only.
    pub read_only: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self { read_only: true }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    /// Load with explicit file locations.
    pub fn load_from(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            debug!(path = %global.display(), "Global config layer");
            builder = builder.add_source(file_source(global, false));
        }
        builder = builder.add_source(file_source(local, false));

        if let Some(explicit) = explicit {
            if !explicit.is_file() {
                anyhow::bail!("Config file '{}' does not exist", explicit.display());
            }
            debug!(path = %explicit.display(), "Explicit config layer");
            builder = builder.add_source(file_source(explicit, true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Self>()
            .context("Invalid configuration")?;

        Ok(config)
    }

    /// Path to the global configuration file, if the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn file_source(path: &Path, required: bool) -> impl config::Source + Send + Sync + 'static {
    File::from(path.to_path_buf())
        .format(FileFormat::Toml)
        .required(required)
}
