//! Path derivation for a kickstart run.
//!
//! Every path is a pure function of the [`KickstartContext`]; nothing is
//! cached, so a path can never disagree with the template it was derived for.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::context::KickstartContext;

/// Directory under the stub root holding one sub-directory per template.
pub const KICKSTART_STUB_DIR: &str = "kickstart";

/// Name of the deployed manifest inside the project.
pub const MANIFEST_FILE: &str = "draft.yaml";

/// Marker appended to the manifest stub name for teams-enabled projects.
pub const TEAMS_SUFFIX: &str = "with-teams";

const SEEDERS_DIR: [&str; 2] = ["database", "seeders"];
const MIGRATIONS_DIR: [&str; 2] = ["database", "migrations"];

/// Derives every path the pipeline touches.
#[derive(Debug, Clone)]
pub struct PathResolver {
    context: Arc<KickstartContext>,
}

impl PathResolver {
    pub fn new(context: Arc<KickstartContext>) -> Self {
        Self { context }
    }

    pub fn project_root(&self) -> &Path {
        self.context.project_root()
    }

    /// `<project>/draft.yaml`
    pub fn manifest_destination(&self) -> PathBuf {
        self.project_root().join(MANIFEST_FILE)
    }

    /// `<stub-root>/kickstart/<template>/draft[with-teams].yaml`
    pub fn manifest_stub(&self, teams: bool) -> PathBuf {
        let suffix = if teams { TEAMS_SUFFIX } else { "" };
        self.seeder_directory().join(format!("draft{suffix}.yaml"))
    }

    /// `<stub-root>/kickstart/<template>`
    pub fn seeder_directory(&self) -> PathBuf {
        self.context
            .stub_root()
            .join(KICKSTART_STUB_DIR)
            .join(self.context.template().as_str())
    }

    /// `<project>/database/seeders/<SeederClass>.php`
    pub fn seeder_destination_file(&self) -> PathBuf {
        SEEDERS_DIR
            .iter()
            .fold(self.project_root().to_path_buf(), |path, dir| path.join(dir))
            .join(self.context.template().seeder_file_name())
    }

    /// `<seeder-directory>/<SeederClass>.php.stub`
    pub fn seeder_stub_file(&self) -> PathBuf {
        let destination = self.seeder_destination_file();
        // The destination always ends in the seeder file name.
        let file_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.context.template().seeder_file_name());

        self.seeder_directory().join(format!("{file_name}.stub"))
    }

    /// `<project>/database/migrations`
    pub fn migrations_directory(&self) -> PathBuf {
        MIGRATIONS_DIR
            .iter()
            .fold(self.project_root().to_path_buf(), |path, dir| path.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Template;

    fn resolver(template: Template) -> PathResolver {
        PathResolver::new(Arc::new(KickstartContext::new(
            "/srv/app",
            "/opt/installer/stubs",
            template,
            false,
        )))
    }

    #[test]
    fn project_root_is_unchanged() {
        assert_eq!(resolver(Template::Blog).project_root(), Path::new("/srv/app"));
    }

    #[test]
    fn manifest_paths() {
        let paths = resolver(Template::Blog);
        assert_eq!(
            paths.manifest_destination(),
            PathBuf::from("/srv/app/draft.yaml")
        );
        assert_eq!(
            paths.manifest_stub(false),
            PathBuf::from("/opt/installer/stubs/kickstart/blog/draft.yaml")
        );
        assert_eq!(
            paths.manifest_stub(true),
            PathBuf::from("/opt/installer/stubs/kickstart/blog/draftwith-teams.yaml")
        );
    }

    #[test]
    fn seeder_paths_follow_the_template() {
        let paths = resolver(Template::PhoneBook);
        assert_eq!(
            paths.seeder_directory(),
            PathBuf::from("/opt/installer/stubs/kickstart/phone-book")
        );
        assert_eq!(
            paths.seeder_destination_file(),
            PathBuf::from("/srv/app/database/seeders/PhoneBookKickstartSeeder.php")
        );
        assert_eq!(
            paths.seeder_stub_file(),
            PathBuf::from(
                "/opt/installer/stubs/kickstart/phone-book/PhoneBookKickstartSeeder.php.stub"
            )
        );
    }

    #[test]
    fn every_template_has_a_distinct_seeder_destination() {
        let destinations: std::collections::HashSet<_> = Template::ALL
            .iter()
            .map(|t| resolver(*t).seeder_destination_file())
            .collect();
        assert_eq!(destinations.len(), Template::ALL.len());
    }

    #[test]
    fn migrations_directory() {
        assert_eq!(
            resolver(Template::Podcast).migrations_directory(),
            PathBuf::from("/srv/app/database/migrations")
        );
    }
}
