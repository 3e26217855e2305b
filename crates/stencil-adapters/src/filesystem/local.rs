//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stencil_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::{StencilError, StencilResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        // A previous run may have left the file read-only.
        if let Ok(metadata) = std::fs::symlink_metadata(path) {
            let mut perms = metadata.permissions();
            if metadata.is_file() && perms.readonly() {
                trace!(path = %path.display(), "Clearing read-only flag before overwrite");
                make_writable(&mut perms);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "unlock file"))?;
            }
        }

        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> StencilResult<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> StencilResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(permissions.unix_mode()))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // Only the read-only flag is representable here.
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            perms.set_readonly(!permissions.writable());
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        Ok(())
    }

    fn permissions(&self, path: &Path) -> StencilResult<Option<Permissions>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(path, e, "get metadata")),
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Ok(Some(Permissions::from_unix_mode(metadata.permissions().mode())))
        }
        // No executable bit to report.
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(None)
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(unix)]
fn make_writable(perms: &mut std::fs::Permissions) {
    use std::os::unix::fs::PermissionsExt;
    perms.set_mode(perms.mode() | 0o200);
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(perms: &mut std::fs::Permissions) {
    perms.set_readonly(false);
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StencilError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert_eq!(fs.read_file(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn overwrites_read_only_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "one").unwrap();
        fs.set_permissions(&path, Permissions::read_only()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().permissions().readonly());

        fs.write_file(&path, "two").unwrap();
        assert_eq!(fs.read_file(&path).unwrap().as_deref(), Some(&b"two"[..]));
    }

    #[cfg(unix)]
    #[test]
    fn applies_unix_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hook");
        let fs = LocalFilesystem::new();
        fs.write_file(&path, "#!/bin/sh").unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

        fs.set_permissions(&path, Permissions::executable()).unwrap();
        assert_eq!(mode(&path), 0o555);

        fs.set_permissions(&path, Permissions::executable().with_writable(true))
            .unwrap();
        assert_eq!(mode(&path), 0o755);

        fs.set_permissions(&path, Permissions::read_write()).unwrap();
        assert_eq!(mode(&path), 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn reports_permissions_from_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hook");
        let fs = LocalFilesystem::new();
        fs.write_file(&path, "#!/bin/sh").unwrap();

        fs.set_permissions(&path, Permissions::executable()).unwrap();
        assert_eq!(fs.permissions(&path).unwrap(), Some(Permissions::executable()));

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(fs.permissions(&path).unwrap(), Some(Permissions::read_write()));

        assert_eq!(fs.permissions(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn reads_non_utf8_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let content = LocalFilesystem::new().read_file(&path).unwrap();
        assert_eq!(content, Some(vec![0xff, 0xfe, 0x00]));
    }

    #[test]
    fn write_into_missing_directory_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("file.txt");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("file.txt"));
    }
}
