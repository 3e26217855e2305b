//! Implementations of the `Filesystem` port.
//!
//! `LocalFilesystem` writes to disk; `MemoryFilesystem` keeps everything in
//! a shared map and is used by tests and dry runs.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
