//! The immutable inputs of one kickstart run.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::{catalog::Template, error::DomainError};

/// Everything a kickstart run is parameterised by.
///
/// Built once, before any path is computed, and shared (behind an `Arc`) by
/// the draft, the path resolver and the engine. There is no way to observe a
/// context without a validated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickstartContext {
    project_root: PathBuf,
    stub_root: PathBuf,
    template: Template,
    using_teams: bool,
}

impl KickstartContext {
    /// `stub_root` is the directory containing `kickstart/<template>/`.
    pub fn new(
        project_root: impl Into<PathBuf>,
        stub_root: impl Into<PathBuf>,
        template: Template,
        using_teams: bool,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            stub_root: stub_root.into(),
            template,
            using_teams,
        }
    }

    /// Like [`Self::new`], validating a template name against the catalog.
    pub fn from_name(
        project_root: impl Into<PathBuf>,
        stub_root: impl Into<PathBuf>,
        template: &str,
        using_teams: bool,
    ) -> Result<Self, DomainError> {
        let template = Template::from_str(template)?;
        Ok(Self::new(project_root, stub_root, template, using_teams))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn stub_root(&self) -> &Path {
        &self.stub_root
    }

    pub fn template(&self) -> Template {
        self.template
    }

    /// Whether the target project has teams support enabled.
    pub fn using_teams(&self) -> bool {
        self.using_teams
    }
}
