//! Kickstart Service - main application orchestrator.
//!
//! This service sequences the kickstart pipeline:
//! 1. Deploy the draft manifest stub
//! 2. Deploy the template seeder stub
//! 3. Delete the generic seeders the manifest names
//! 4. Diagnose missing migration prerequisites
//!
//! A failure aborts the remaining steps. Nothing is rolled back.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestParser},
        services::draft::Draft,
    },
    domain::{KickstartContext, MigrationReport, PathResolver, Template},
    error::{KickstartError, KickstartResult},
};

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickstartSummary {
    pub template: Template,
    pub manifest: PathBuf,
    pub seeder: PathBuf,
    pub removed_seeders: Vec<PathBuf>,
    /// Why seeding should be skipped, if it should.
    pub advisory: Option<String>,
}

impl KickstartSummary {
    pub fn seeding_ready(&self) -> bool {
        self.advisory.is_none()
    }
}

/// Applies a kickstart template to a project.
pub struct Kickstart {
    context: Arc<KickstartContext>,
    filesystem: Arc<dyn Filesystem>,
    paths: PathResolver,
    draft: Draft,
}

impl Kickstart {
    /// Create the engine for one project and template.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kickstart_core::{application::Kickstart, domain::KickstartContext};
    ///
    /// let context = KickstartContext::from_name("./my-app", "./stubs", "blog", false)?;
    /// let mut kickstart = Kickstart::new(
    ///     context,
    ///     filesystem, // Arc<dyn Filesystem>
    ///     parser,     // Arc<dyn ManifestParser>
    /// );
    /// let summary = kickstart.run()?;
    /// ```
    pub fn new(
        context: KickstartContext,
        filesystem: Arc<dyn Filesystem>,
        parser: Arc<dyn ManifestParser>,
    ) -> Self {
        let context = Arc::new(context);
        Self {
            paths: PathResolver::new(Arc::clone(&context)),
            draft: Draft::new(Arc::clone(&context), Arc::clone(&filesystem), parser),
            context,
            filesystem,
        }
    }

    pub fn context(&self) -> &KickstartContext {
        &self.context
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Run every step in order.
    #[instrument(
        skip_all,
        fields(
            template = %self.context.template(),
            project = %self.context.project_root().display(),
            teams = self.context.using_teams()
        )
    )]
    pub fn run(&mut self) -> KickstartResult<KickstartSummary> {
        info!("Applying kickstart template");

        let manifest = self.deploy_manifest()?;
        let seeder = self.deploy_seeder()?;
        let removed_seeders = self.remove_generic_seeders()?;
        let advisory = self.check_migration_prerequisites();

        match &advisory {
            Some(message) => warn!("{message}"),
            None => info!("Seeding prerequisites met"),
        }

        Ok(KickstartSummary {
            template: self.context.template(),
            manifest,
            seeder,
            removed_seeders,
            advisory,
        })
    }

    /// Step 1: copy the manifest stub matching the teams setting.
    pub fn deploy_manifest(&self) -> KickstartResult<PathBuf> {
        let destination = self.draft.deploy(self.context.using_teams())?;
        info!(path = %destination.display(), "Draft manifest deployed");
        Ok(destination)
    }

    /// Step 2: write the template seeder into `database/seeders`.
    ///
    /// Overwrites an existing seeder.
    pub fn deploy_seeder(&self) -> KickstartResult<PathBuf> {
        if !self.draft.exists_in_project() {
            return Err(ApplicationError::ManifestNotFound {
                path: self.draft.file_path(),
            }
            .into());
        }

        let stub = self.paths.seeder_stub_file();
        if !self.filesystem.exists(&stub) {
            return Err(ApplicationError::SeederStubNotFound { path: stub }.into());
        }

        let content = self.filesystem.read_to_string(&stub)?;
        let destination = self.paths.seeder_destination_file();

        self.filesystem
            .write_file(&destination, &content)
            .map_err(|e| ApplicationError::SeederWriteFailed {
                path: destination.clone(),
                reason: write_failure_reason(e),
            })?;

        info!(path = %destination.display(), "Template seeder deployed");
        Ok(destination)
    }

    /// Step 3: delete every `{Resource}Seeder.php` named by the manifest's
    /// `seeders` list under the template's seeder directory tree.
    ///
    /// Returns the deleted files. Files whose real path cannot be resolved,
    /// or that fail to delete, are logged and skipped; the remaining matches
    /// are still removed.
    pub fn remove_generic_seeders(&mut self) -> KickstartResult<Vec<PathBuf>> {
        let names = self.draft.manifest()?.generic_seeder_files()?;
        let directory = self.paths.seeder_directory();

        debug!(seeders = ?names, directory = %directory.display(), "Looking for generic seeders");

        let mut removed = Vec::new();
        for file in self.filesystem.find_files_named(&directory, &names)? {
            let Some(real) = self.filesystem.real_path(&file) else {
                debug!(path = %file.display(), "Skipping seeder without a real path");
                continue;
            };

            if let Err(e) = self.filesystem.remove_file(&real) {
                warn!(path = %real.display(), error = %e, "Could not remove generic seeder");
                continue;
            }
            debug!(path = %real.display(), "Generic seeder removed");
            removed.push(real);
        }

        info!(count = removed.len(), "Generic seeders removed");
        Ok(removed)
    }

    /// Step 4: scan `database/migrations`. An unreadable directory counts as
    /// empty.
    pub fn scan_migrations(&self) -> MigrationReport {
        let directory = self.paths.migrations_directory();

        let names = self.filesystem.list_dir(&directory).unwrap_or_else(|e| {
            debug!(error = %e, directory = %directory.display(), "Migrations not listable");
            Vec::new()
        });

        MigrationReport::scan(names, self.context.using_teams())
    }

    /// Advisory explaining why seeding should be skipped, or `None` when
    /// every prerequisite migration is present.
    pub fn check_migration_prerequisites(&self) -> Option<String> {
        self.scan_migrations().advisory(self.context.template())
    }
}

/// Keep the adapter's reason without repeating its path.
fn write_failure_reason(error: KickstartError) -> String {
    match error {
        KickstartError::Application(ApplicationError::FilesystemError { reason, .. }) => reason,
        other => other.to_string(),
    }
}

impl std::fmt::Debug for Kickstart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kickstart")
            .field("context", &self.context)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}
