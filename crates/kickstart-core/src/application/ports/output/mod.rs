//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kickstart-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Manifest;
use crate::error::KickstartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kickstart_adapters::filesystem::LocalFilesystem` (production)
/// - `kickstart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Writes do not create parent directories
/// - Writes and copies overwrite existing files
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> KickstartResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KickstartResult<()>;

    /// Copy a file, replacing the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> KickstartResult<()>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> KickstartResult<()>;

    /// Names of the entries directly inside `dir` (non-recursive).
    fn list_dir(&self, dir: &Path) -> KickstartResult<Vec<String>>;

    /// All files under `root` (recursively) whose file name is one of `names`.
    ///
    /// Symlinks are followed. Any entry the walk cannot read fails the whole
    /// call, including a missing `root` and a symlink loop; no partial list
    /// is returned.
    fn find_files_named(&self, root: &Path, names: &[String]) -> KickstartResult<Vec<PathBuf>>;

    /// Canonical path of an existing file, or `None` if it cannot be resolved.
    fn real_path(&self, path: &Path) -> Option<PathBuf>;
}

/// Port for structured-document parsing.
///
/// Implemented by:
/// - `kickstart_adapters::parser::YamlManifestParser`
#[cfg_attr(test, mockall::automock)]
pub trait ManifestParser: Send + Sync {
    /// Parse manifest text. `origin` is used for error reporting only.
    fn parse(&self, source: &str, origin: &Path) -> KickstartResult<Manifest>;
}
