use std::collections::HashMap;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// Final file set ready for materialization.
///
/// This is the output of synthesis. It contains no business logic, only data:
/// every file's rendered bytes, its permissions and the component that owns it.
#[derive(Debug, Clone, Default)]
pub struct ProjectStructure {
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(
        &mut self,
        owner: impl Into<String>,
        path: RelativePath,
        content: String,
        permissions: Permissions,
    ) {
        self.files.push(FileToWrite {
            owner: owner.into(),
            path,
            content,
            permissions,
        });
    }

    /// Reject empty structures and any path claimed twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyProject);
        }

        let mut owners: HashMap<&RelativePath, &str> = HashMap::new();
        for file in &self.files {
            if let Some(first) = owners.insert(&file.path, &file.owner) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                    first: first.to_string(),
                    second: file.owner.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn get(&self, path: &str) -> Option<&FileToWrite> {
        self.files
            .iter()
            .find(|f| f.path.as_path() == std::path::Path::new(path))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(FileToWrite::size).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileToWrite {
    pub owner: String,
    pub path: RelativePath,
    pub content: String,
    pub permissions: Permissions,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
