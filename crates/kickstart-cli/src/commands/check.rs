//! `kickstart check`: report migration prerequisites without side effects.

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;

use kickstart_adapters::{LocalFilesystem, YamlManifestParser};
use kickstart_core::application::Kickstart;

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    commands::target::build_context,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// A missing migration is advice, not failure: the exit code stays 0.
#[instrument(skip_all, fields(project = %args.target.project.display()))]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let context = build_context(&args.target, &config, !global.quiet && !output.is_json())?;
    let kickstart = Kickstart::new(
        context,
        Arc::new(LocalFilesystem::new()),
        Arc::new(YamlManifestParser::new()),
    );

    let report = kickstart.scan_migrations();
    let advisory = kickstart.check_migration_prerequisites();

    if output.is_json() {
        let missing: Vec<&str> = report.missing().iter().map(|m| m.as_str()).collect();
        output.json(&json!({
            "template": kickstart.context().template().as_str(),
            "teams": kickstart.context().using_teams(),
            "missing": missing,
            "advisory": advisory,
        }))?;
        return Ok(());
    }

    match advisory {
        Some(message) => output.warning(&message)?,
        None => output.success(&format!(
            "The {} kickstart can seed {}",
            kickstart.context().template(),
            kickstart.paths().project_root().display()
        ))?,
    }
    Ok(())
}
