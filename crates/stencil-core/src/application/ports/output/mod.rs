//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use crate::domain::Permissions;
use crate::error::StencilResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths handed to the port are already joined onto the output root
/// - Permissions are capability-based, not Unix-specific
/// - `write_file` must succeed over a read-only file left by a previous run
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Read a file's raw bytes, `None` if it does not exist.
    ///
    /// Bytes rather than text: a target path may hold anything, and
    /// non-UTF-8 content is simply stale.
    fn read_file(&self, path: &Path) -> StencilResult<Option<Vec<u8>>>;

    /// Apply capability-based permissions to a file.
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> StencilResult<()>;

    /// Permissions currently on a file.
    ///
    /// `None` if the file does not exist or the platform cannot report them.
    fn permissions(&self, path: &Path) -> StencilResult<Option<Permissions>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
