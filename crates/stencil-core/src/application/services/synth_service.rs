//! Synth Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Render the project's components into a validated file set
//! 2. Prepare the output root
//! 3. Write every file and apply its permissions
//!
//! The first failure aborts the run. Files already written stay on disk; the
//! next run regenerates them.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, FileToWrite, Project, ProjectStructure},
    error::StencilResult,
};

/// What happened to a single file during synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Updated,
    Unchanged,
}

impl FileOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub owner: String,
    pub outcome: FileOutcome,
    pub bytes: usize,
    pub executable: bool,
}

/// Result of a synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthReport {
    pub root: PathBuf,
    pub files: Vec<WrittenFile>,
}

impl SynthReport {
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}

/// Drift status of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileStatus {
    UpToDate,
    Missing,
    /// Content differs from a fresh render.
    Stale,
    /// Content matches but the executable bit does not.
    PermissionsDrift,
}

impl FileStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpToDate => "up-to-date",
            Self::Missing => "missing",
            Self::Stale => "stale",
            Self::PermissionsDrift => "permissions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub path: PathBuf,
    pub owner: String,
    pub status: FileStatus,
}

/// Result of comparing the output root with what synthesis would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub root: PathBuf,
    pub files: Vec<CheckedFile>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.status == FileStatus::UpToDate)
    }

    pub fn drifted(&self) -> impl Iterator<Item = &CheckedFile> {
        self.files
            .iter()
            .filter(|f| f.status != FileStatus::UpToDate)
    }
}

/// Writes synthesized projects through the filesystem port.
pub struct SynthService {
    filesystem: Box<dyn Filesystem>,
    read_only: bool,
}

impl SynthService {
    /// Create a new synth service. Generated files are read-only by default.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            read_only: true,
        }
    }

    /// Whether generated files are left read-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Render the project without touching the filesystem.
    pub fn plan(&self, project: &Project) -> StencilResult<ProjectStructure> {
        Ok(project.synthesize()?)
    }

    /// Render the project and write every file under `root`.
    #[instrument(
        skip_all,
        fields(
            project = %project.descriptor().name(),
            root = %root.as_ref().display()
        )
    )]
    pub fn synthesize(
        &self,
        project: &Project,
        root: impl AsRef<Path>,
    ) -> StencilResult<SynthReport> {
        let structure = project.synthesize()?;
        info!(
            files = structure.file_count(),
            bytes = structure.total_bytes(),
            "Project rendered"
        );

        let report = self.write_structure(&structure, root.as_ref())?;

        info!(
            created = report.count(FileOutcome::Created),
            updated = report.count(FileOutcome::Updated),
            unchanged = report.count(FileOutcome::Unchanged),
            "Synthesis completed"
        );
        Ok(report)
    }

    /// Compare what synthesis would write with what is on disk.
    ///
    /// Only the executable bit counts as permission drift. Writability is a
    /// per-run choice (`read_only`) and is not tracked.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn check(&self, project: &Project, root: impl AsRef<Path>) -> StencilResult<CheckReport> {
        let root = root.as_ref();
        let structure = project.synthesize()?;

        let mut files = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            let path = root.join(file.path.as_path());
            let status = match self.filesystem.read_file(&path)? {
                None => FileStatus::Missing,
                Some(existing) if existing != file.content.as_bytes() => FileStatus::Stale,
                Some(_) => match self.filesystem.permissions(&path)? {
                    Some(actual)
                        if actual.executable_flag() != file.permissions.executable_flag() =>
                    {
                        FileStatus::PermissionsDrift
                    }
                    _ => FileStatus::UpToDate,
                },
            };
            debug!(path = %file.path, status = status.as_str(), "Checked file");
            files.push(CheckedFile {
                path: file.path.as_path().to_path_buf(),
                owner: file.owner.clone(),
                status,
            });
        }

        Ok(CheckReport {
            root: root.to_path_buf(),
            files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(&self, structure: &ProjectStructure, root: &Path) -> StencilResult<SynthReport> {
        validator::validate_project_structure(structure)?;
        self.prepare_root(root)?;

        let files = structure
            .files()
            .map(|file| self.write_file(root, file))
            .collect::<StencilResult<Vec<_>>>()?;

        Ok(SynthReport {
            root: root.to_path_buf(),
            files,
        })
    }

    fn prepare_root(&self, root: &Path) -> StencilResult<()> {
        if self.filesystem.exists(root) && !self.filesystem.is_dir(root) {
            return Err(ApplicationError::InvalidRoot {
                path: root.to_path_buf(),
            }
            .into());
        }
        self.filesystem.create_dir_all(root)
    }

    fn write_file(&self, root: &Path, file: &FileToWrite) -> StencilResult<WrittenFile> {
        let path = root.join(file.path.as_path());

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        let outcome = match self.filesystem.read_file(&path)? {
            Some(existing) if existing == file.content.as_bytes() => FileOutcome::Unchanged,
            Some(_) => {
                self.filesystem.write_file(&path, &file.content)?;
                FileOutcome::Updated
            }
            None => {
                self.filesystem.write_file(&path, &file.content)?;
                FileOutcome::Created
            }
        };

        let permissions = if self.read_only {
            file.permissions
        } else {
            file.permissions.with_writable(true)
        };
        self.filesystem.set_permissions(&path, permissions)?;

        debug!(
            path = %file.path,
            owner = %file.owner,
            outcome = outcome.as_str(),
            "Wrote file"
        );

        Ok(WrittenFile {
            path: file.path.as_path().to_path_buf(),
            owner: file.owner.clone(),
            outcome,
            bytes: file.size(),
            executable: permissions.executable_flag(),
        })
    }
}
