//! In-memory filesystem for tests and dry runs.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::StencilResult,
};

/// In-memory filesystem. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, MemoryFile>,
    directories: HashSet<PathBuf>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    permissions: Permissions,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// File content, if the file exists.
    pub fn contents(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|f| f.content.clone())
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        matches!(self.permissions(path), Ok(Some(p)) if p.executable_flag())
    }

    /// All files, in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "A file exists at this path".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        // Overwriting unlocks the file, like the local adapter does.
        let permissions = inner
            .files
            .get(path)
            .map_or(Permissions::read_write(), |f| f.permissions.with_writable(true));
        inner.files.insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.to_string(),
                permissions,
            },
        );
        Ok(())
    }

    fn read_file(&self, path: &Path) -> StencilResult<Option<Vec<u8>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.files.get(path).map(|f| f.content.clone().into_bytes()))
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let file = inner
            .files
            .get_mut(path)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            })?;
        file.permissions = permissions;
        Ok(())
    }

    fn permissions(&self, path: &Path) -> StencilResult<Option<Permissions>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.files.get(path).map(|f| f.permissions))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.contents(Path::new("/a/b.txt")).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a")));
        assert!(!fs.is_dir(Path::new("/a/b.txt")));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/hook"), "#!/bin/sh").unwrap();
        fs.set_permissions(Path::new("/out/hook"), Permissions::executable())
            .unwrap();

        assert!(view.is_executable(Path::new("/out/hook")));
        assert_eq!(view.list_files(), vec![PathBuf::from("/out/hook")]);

        view.clear();
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn set_permissions_on_missing_file_fails() {
        let fs = MemoryFilesystem::new();
        assert!(
            fs.set_permissions(Path::new("/nope"), Permissions::read_only())
                .is_err()
        );
    }
}
