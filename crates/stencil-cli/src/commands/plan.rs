//! Implementation of the `stencil plan` command.

use serde_json::json;

use stencil_adapters::MemoryFilesystem;
use stencil_core::application::SynthService;

use crate::{
    cli::{ListFormat, PlanArgs},
    commands::build_project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = build_project(&config, &args.project)?;
    let structure = SynthService::new(Box::new(MemoryFilesystem::new())).plan(&project)?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "Files for '{}':",
                project.descriptor().package_name()
            ))?;
            for file in structure.files() {
                output.data(&format!(
                    "  {:<28} {:<18} {:o}  {:>5} B",
                    file.path.to_string(),
                    file.owner,
                    file.permissions.unix_mode(),
                    file.size()
                ))?;
            }
        }

        ListFormat::List => {
            for file in structure.files() {
                output.data(&file.path.to_string())?;
            }
        }

        ListFormat::Json => {
            let files: Vec<_> = structure
                .files()
                .map(|f| {
                    json!({
                        "path": f.path.to_string(),
                        "owner": f.owner,
                        "executable": f.permissions.executable_flag(),
                        "bytes": f.size(),
                    })
                })
                .collect();
            output.json(&files)?;
        }

        ListFormat::Csv => {
            output.data("path,owner,executable,bytes")?;
            for f in structure.files() {
                output.data(&format!(
                    "{},{},{},{}",
                    f.path,
                    f.owner,
                    f.permissions.executable_flag(),
                    f.size()
                ))?;
            }
        }
    }

    Ok(())
}
