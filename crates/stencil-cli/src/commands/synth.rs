//! Implementation of the `stencil synth` command.
//!
//! Translates flags and configuration into a project, hands it to the
//! synth service and reports one line per file.

use serde_json::json;
use tracing::{info, instrument};

use stencil_adapters::LocalFilesystem;
use stencil_core::application::{SynthReport, SynthService};

use crate::{
    cli::{OutputFormat, SynthArgs},
    commands::build_project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(args: SynthArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = build_project(&config, &args.project)?;
    let read_only = config.synth.read_only && !args.writable;

    let service = SynthService::new(Box::new(LocalFilesystem::new())).read_only(read_only);

    if args.dry_run {
        let structure = service.plan(&project)?;
        output.info(&format!(
            "Dry run: would write {} files to {}",
            structure.file_count(),
            args.root.display()
        ))?;
        for file in structure.files() {
            output.data(&format!("  {:<28} {}", file.path.to_string(), file.owner))?;
        }
        return Ok(());
    }

    let report = service.synthesize(&project, &args.root)?;
    info!(files = report.files.len(), read_only, "Files written");

    if output.format() == OutputFormat::Json {
        output.json(&report_json(&report))?;
        return Ok(());
    }

    output.header(&format!(
        "Synthesized '{}' into {}",
        project.descriptor().name(),
        args.root.display()
    ))?;
    for file in &report.files {
        output.print(&format!(
            "  {:<28} {}",
            file.path.display().to_string(),
            output.status(file.outcome.as_str())
        ))?;
    }
    output.success(&format!("{} files up to date", report.files.len()))?;

    Ok(())
}

fn report_json(report: &SynthReport) -> serde_json::Value {
    json!({
        "root": report.root.display().to_string(),
        "files": report.files.iter().map(|f| json!({
            "path": f.path.display().to_string(),
            "owner": f.owner,
            "outcome": f.outcome.as_str(),
            "bytes": f.bytes,
            "executable": f.executable,
        })).collect::<Vec<_>>(),
    })
}
