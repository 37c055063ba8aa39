//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kickstart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KickstartResult,
};

/// In-memory filesystem for testing.
///
/// Directories are implied by the files inside them plus any created with
/// [`MemoryFilesystem::create_dir_all`]. Files marked with
/// [`MemoryFilesystem::mark_unresolvable`] exist but have no real path.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    unresolvable: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn has_dir(&self, path: &Path) -> bool {
        self.directories.contains(path) || self.files.keys().any(|f| f.parent() == Some(path))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all its parents.
    pub fn create_dir_all(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Make [`Filesystem::real_path`] fail for an existing file.
    pub fn mark_unresolvable(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.unresolvable.insert(path.as_ref().to_path_buf());
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.has_dir(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> KickstartResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> KickstartResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.has_dir(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> KickstartResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn remove_file(&self, path: &Path) -> KickstartResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn list_dir(&self, dir: &Path) -> KickstartResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        if !inner.has_dir(dir) {
            return Err(not_found(dir));
        }

        let children: BTreeSet<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();

        Ok(children.into_iter().collect())
    }

    fn find_files_named(&self, root: &Path, names: &[String]) -> KickstartResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        if !inner.has_dir(root) {
            return Err(not_found(root));
        }
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| names.iter().any(|wanted| wanted == n))
            })
            .cloned()
            .collect())
    }

    fn real_path(&self, path: &Path) -> Option<PathBuf> {
        let inner = self.inner.read().ok()?;
        (inner.files.contains_key(path) && !inner.unresolvable.contains(path))
            .then(|| path.to_path_buf())
    }
}

fn not_found(path: &Path) -> kickstart_core::error::KickstartError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}
