//! Command handlers. Each one turns parsed arguments plus the loaded
//! configuration into calls on `stencil-core` and prints the result.

pub mod check;
pub mod completions;
pub mod components;
pub mod config;
pub mod init;
pub mod plan;
pub mod synth;

use stencil_core::domain::{Project, ProjectDescriptor, ProjectOptions};
use tracing::debug;

use crate::{cli::ProjectArgs, config::AppConfig, error::CliResult};

/// Merge CLI overrides into the configured options.
pub fn resolve_options(config: &AppConfig, args: &ProjectArgs) -> ProjectOptions {
    let mut options = config.project.clone();
    if let Some(package_name) = &args.package_name {
        options.package_name = package_name.clone();
    }
    if let Some(description) = &args.description {
        options.description = description.clone();
    }
    options
}

/// Build the starter project from configuration and flags.
///
/// Options are validated here, before any command touches the filesystem.
pub fn build_project(config: &AppConfig, args: &ProjectArgs) -> CliResult<Project> {
    let descriptor = ProjectDescriptor::from_options(resolve_options(config, args))?;
    let mut project = Project::lambda_starter(descriptor);

    for name in &args.without {
        debug!(component = %name, "Removing component");
        project = project.without_component(name)?;
    }

    Ok(project)
}
