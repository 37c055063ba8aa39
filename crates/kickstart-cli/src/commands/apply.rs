//! Implementation of the `kickstart apply` command.
//!
//! Responsibility: build a context from the arguments, run the core
//! pipeline, and display results. No business logic lives here.

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tracing::{info, instrument};

use kickstart_adapters::{LocalFilesystem, YamlManifestParser};
use kickstart_core::{
    application::{Kickstart, KickstartSummary},
    domain::{KickstartContext, PathResolver},
};

use crate::{
    cli::{ApplyArgs, global::GlobalArgs},
    commands::target::build_context,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `kickstart apply` command.
///
/// 1. Resolve project, template, stubs and teams
/// 2. Early-exit with the planned paths on `--dry-run`
/// 3. Run the pipeline against the real filesystem
/// 4. Report what changed and whether seeding can proceed
#[instrument(skip_all, fields(project = %args.target.project.display()))]
pub fn execute(
    args: ApplyArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let context = build_context(&args.target, &config, !global.quiet && !output.is_json())?;

    if args.dry_run {
        return show_plan(&context, &output);
    }

    output.header(&format!(
        "Applying the {} kickstart to {}",
        context.template(),
        context.project_root().display()
    ))?;

    let spinner = spinner(&output, &context);
    let mut kickstart = Kickstart::new(
        context,
        Arc::new(LocalFilesystem::new()),
        Arc::new(YamlManifestParser::new()),
    );
    let result = kickstart.run();
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let summary = result?;

    info!(
        template = %summary.template,
        removed = summary.removed_seeders.len(),
        "Kickstart applied"
    );

    report(&summary, &output)
}

fn show_plan(context: &KickstartContext, output: &OutputManager) -> CliResult<()> {
    let paths = PathResolver::new(Arc::new(context.clone()));
    let teams = context.using_teams();

    if output.is_json() {
        output.json(&json!({
            "dry_run": true,
            "template": context.template().as_str(),
            "teams": teams,
            "manifest": { "from": paths.manifest_stub(teams), "to": paths.manifest_destination() },
            "seeder": { "from": paths.seeder_stub_file(), "to": paths.seeder_destination_file() },
            "seeder_directory": paths.seeder_directory(),
            "migrations": paths.migrations_directory(),
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would apply the {} kickstart{}",
        context.template(),
        if teams { " (teams)" } else { "" }
    ))?;
    output.path("manifest", &paths.manifest_stub(teams))?;
    output.path("  ->", &paths.manifest_destination())?;
    output.path("seeder", &paths.seeder_stub_file())?;
    output.path("  ->", &paths.seeder_destination_file())?;
    output.path("cleanup", &paths.seeder_directory())?;
    output.path("migrations", &paths.migrations_directory())?;
    Ok(())
}

fn spinner(output: &OutputManager, context: &KickstartContext) -> Option<ProgressBar> {
    if output.is_quiet() || !output.supports_color() {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(format!("deploying {} stubs", context.template()));
    bar.enable_steady_tick(Duration::from_millis(80));
    Some(bar)
}

fn report(summary: &KickstartSummary, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "template": summary.template.as_str(),
            "manifest": summary.manifest,
            "seeder": summary.seeder,
            "removed_seeders": summary.removed_seeders,
            "seeding_ready": summary.seeding_ready(),
            "advisory": summary.advisory,
        }))?;
        return Ok(());
    }

    output.success(&format!("Manifest written to {}", summary.manifest.display()))?;
    output.success(&format!("Seeder written to {}", summary.seeder.display()))?;
    if summary.removed_seeders.is_empty() {
        output.info("No generic seeders to remove")?;
    }
    for removed in &summary.removed_seeders {
        output.success(&format!("Removed {}", removed.display()))?;
    }

    match &summary.advisory {
        Some(advisory) => output.warning(advisory)?,
        None => output.success("Migrations in place; ready to seed")?,
    }
    Ok(())
}
