//! Implementation of the `stencil check` command.

use serde_json::json;
use tracing::instrument;

use stencil_adapters::LocalFilesystem;
use stencil_core::application::{FileStatus, SynthService};

use crate::{
    cli::{CheckArgs, OutputFormat},
    commands::build_project,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Compare the files under ROOT with a fresh render. Drift is an error so
/// the exit code can gate CI.
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = build_project(&config, &args.project)?;
    let report = SynthService::new(Box::new(LocalFilesystem::new())).check(&project, &args.root)?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "root": report.root.display().to_string(),
            "clean": report.is_clean(),
            "files": report.files.iter().map(|f| json!({
                "path": f.path.display().to_string(),
                "owner": f.owner,
                "status": f.status.as_str(),
            })).collect::<Vec<_>>(),
        }))?;
    } else {
        for file in &report.files {
            let line = format!(
                "  {:<28} {}",
                file.path.display().to_string(),
                output.status(file.status.as_str())
            );
            // Drifted files are the result; show them even with --quiet.
            if file.status == FileStatus::UpToDate {
                output.print(&line)?;
            } else {
                output.data(&line)?;
            }
        }
    }

    let count = report.drifted().count();
    if count > 0 {
        return Err(CliError::DriftDetected {
            count,
            root: args.root,
        });
    }

    output.success("All generated files are up to date")?;
    Ok(())
}
