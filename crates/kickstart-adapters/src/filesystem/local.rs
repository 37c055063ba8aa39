//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use kickstart_core::{application::ports::Filesystem, error::KickstartResult};

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
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> KickstartResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KickstartResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> KickstartResult<()> {
        if !from.is_file() {
            return Err(map_io_error(
                from,
                io::Error::new(io::ErrorKind::NotFound, "source file does not exist"),
                "copy file",
            ));
        }

        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "copy file"))
    }

    fn remove_file(&self, path: &Path) -> KickstartResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn list_dir(&self, dir: &Path) -> KickstartResult<Vec<String>> {
        let entries = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "list directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names)
    }

    // The first walk error aborts the search.
    fn find_files_named(&self, root: &Path, names: &[String]) -> KickstartResult<Vec<PathBuf>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&path, e.into(), "walk directory")
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| names.iter().any(|n| n == name));

            if matches {
                trace!(path = %entry.path().display(), "Matched file by name");
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }

    fn real_path(&self, path: &Path) -> Option<PathBuf> {
        std::fs::canonicalize(path).ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> kickstart_core::error::KickstartError {
    use kickstart_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
