//! Draft - the template manifest of one kickstart run.
//!
//! Owns the deployed `draft.yaml`: where its stub lives, deploying it into
//! the project, and lazily loading it for attribute lookups.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestParser},
    },
    domain::{KickstartContext, Manifest, PathResolver, Template},
    error::KickstartResult,
};

/// Whether the manifest has been read from disk yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestState {
    Unloaded,
    Loaded(Manifest),
}

/// The active template's manifest.
pub struct Draft {
    context: Arc<KickstartContext>,
    paths: PathResolver,
    filesystem: Arc<dyn Filesystem>,
    parser: Arc<dyn ManifestParser>,
    state: ManifestState,
}

impl Draft {
    pub fn new(
        context: Arc<KickstartContext>,
        filesystem: Arc<dyn Filesystem>,
        parser: Arc<dyn ManifestParser>,
    ) -> Self {
        Self {
            paths: PathResolver::new(Arc::clone(&context)),
            context,
            filesystem,
            parser,
            state: ManifestState::Unloaded,
        }
    }

    pub fn template(&self) -> Template {
        self.context.template()
    }

    /// Look up a dotted attribute, loading the manifest on first use.
    ///
    /// `None` returns the whole manifest; an unresolved path returns `default`.
    pub fn attribute(&mut self, path: Option<&str>, default: Value) -> KickstartResult<Value> {
        Ok(self.manifest()?.get_or(path, default))
    }

    /// Scalar string attribute, if present and a string.
    pub fn attribute_str(&mut self, path: &str) -> KickstartResult<Option<String>> {
        Ok(self
            .manifest()?
            .get(Some(path))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// The loaded manifest.
    pub fn manifest(&mut self) -> KickstartResult<&Manifest> {
        match self.state {
            ManifestState::Loaded(ref manifest) => Ok(manifest),
            ManifestState::Unloaded => {
                self.state = ManifestState::Loaded(self.load()?);
                self.manifest()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ManifestState::Loaded(_))
    }

    /// Copy the manifest stub (teams variant if requested) into the project.
    #[instrument(skip(self), fields(template = %self.template()))]
    pub fn deploy(&self, teams: bool) -> KickstartResult<PathBuf> {
        let from = self.stub_path(teams);
        let to = self.file_path();

        debug!(from = %from.display(), to = %to.display(), "Deploying draft manifest");
        self.filesystem.copy_file(&from, &to)?;

        Ok(to)
    }

    pub fn exists_in_project(&self) -> bool {
        self.filesystem.exists(&self.file_path())
    }

    /// `<project>/draft.yaml`
    pub fn file_path(&self) -> PathBuf {
        self.paths.manifest_destination()
    }

    /// Manifest stub for this template.
    pub fn stub_path(&self, teams: bool) -> PathBuf {
        self.paths.manifest_stub(teams)
    }

    fn load(&self) -> KickstartResult<Manifest> {
        let path = self.file_path();

        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ManifestNotFound { path }.into());
        }

        let source = self.filesystem.read_to_string(&path)?;
        let manifest = self.parser.parse(&source, &path)?;

        debug!(path = %path.display(), "Draft manifest loaded");
        Ok(manifest)
    }
}

impl std::fmt::Debug for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft")
            .field("context", &self.context)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
