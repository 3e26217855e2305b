//! `stencil init`: create a configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write `.stencil.toml` (or the global config) seeded with the effective
/// project identity and the built-in defaults for everything else.
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(args.global)?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let mut new_config = AppConfig::default();
    new_config.project.package_name = config.project.package_name;
    new_config.project.description = config.project.description;

    if args.interactive {
        prompt_identity(&mut new_config)?;
    }

    let toml = new_config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(global: bool) -> CliResult<PathBuf> {
    if !global {
        return Ok(PathBuf::from(LOCAL_CONFIG_FILE));
    }
    AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
        message: "No user configuration directory on this platform".into(),
        source: None,
    })
}

#[cfg(feature = "interactive")]
fn prompt_identity(config: &mut AppConfig) -> CliResult<()> {
    use dialoguer::Input;
    use stencil_core::domain::DomainValidator;

    let mut package_name = Input::<String>::new()
        .with_prompt("Package name")
        .validate_with(|input: &String| -> Result<(), String> {
            DomainValidator::validate_package_name(input).map_err(|e| e.to_string())
        });
    if !config.project.package_name.is_empty() {
        package_name = package_name.default(config.project.package_name.clone());
    }
    config.project.package_name = package_name.interact_text().map_err(prompt_error)?;

    let mut description = Input::<String>::new()
        .with_prompt("Description")
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("description cannot be empty")
            } else {
                Ok(())
            }
        });
    if !config.project.description.is_empty() {
        description = description.default(config.project.description.clone());
    }
    config.project.description = description.interact_text().map_err(prompt_error)?;

    Ok(())
}

/// Ctrl-C at a prompt surfaces as an interrupted read.
#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::InvalidInput {
            message: "Failed to read answer".into(),
            source: Some(Box::new(other)),
        },
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_identity(_config: &mut AppConfig) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
