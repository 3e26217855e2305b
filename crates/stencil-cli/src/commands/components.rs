//! Implementation of the `stencil components` command.

use serde_json::json;

use stencil_core::domain::{Project, ProjectDescriptor, ProjectOptions};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

/// Component names with the paths they own, in composition order.
///
/// Paths do not depend on the project identity, so the starter is rendered
/// with a placeholder one.
fn catalog() -> CliResult<Vec<(String, Vec<String>)>> {
    let descriptor = ProjectDescriptor::from_options(ProjectOptions::new("catalog", "catalog"))?;
    let project = Project::lambda_starter(descriptor);
    let structure = project.synthesize()?;

    Ok(project
        .component_names()
        .into_iter()
        .map(|name| {
            let paths = structure
                .files()
                .filter(|f| f.owner == name)
                .map(|f| f.path.to_string())
                .collect();
            (name.to_string(), paths)
        })
        .collect())
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let catalog = catalog()?;

    if output.format() == OutputFormat::Json {
        let entries: Vec<_> = catalog
            .iter()
            .map(|(name, paths)| json!({ "name": name, "paths": paths }))
            .collect();
        output.json(&entries)?;
        return Ok(());
    }

    output.header("Components (composition order):")?;
    for (name, paths) in catalog {
        output.data(&format!("  {:<18} {}", name, paths.join(", ")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_starts_with_manifest_and_covers_nine_paths() {
        let catalog = catalog().unwrap();
        assert_eq!(
            catalog[0],
            ("package-manifest".to_string(), vec!["package.json".to_string()])
        );
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.iter().map(|(_, p)| p.len()).sum::<usize>(), 9);
    }

    #[test]
    fn catalog_follows_starter_composition() {
        let descriptor =
            ProjectDescriptor::from_options(ProjectOptions::new("x", "y")).unwrap();
        let names: Vec<String> = catalog().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, Project::lambda_starter(descriptor).component_names());
    }
}
