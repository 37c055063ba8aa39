//! Turning `TargetArgs` + config into a validated [`KickstartContext`].
//!
//! Shared by `apply` and `check`. Precedence for every value is the same:
//! command line, then prompt (template only), then config.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use kickstart_adapters::locate_stub_root;
use kickstart_core::{domain::KickstartContext, error::KickstartError};

use crate::{
    cli::TargetArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve project root, stub root, template and teams flag.
pub fn build_context(
    target: &TargetArgs,
    config: &AppConfig,
    allow_prompt: bool,
) -> CliResult<KickstartContext> {
    let project = ensure_project_dir(&target.project)?;

    let template = resolve_template_name(target, config, allow_prompt)?;

    let stub_root = locate_stub_root(target.stubs.as_deref().or(config.stubs.root.as_deref()))?;

    let teams = target.teams || config.defaults.teams;

    debug!(
        project = %project.display(),
        stubs = %stub_root.display(),
        %template,
        teams,
        "Target resolved"
    );

    KickstartContext::from_name(project, stub_root, &template, teams)
        .map_err(|e| CliError::Core(KickstartError::from(e)))
}

fn ensure_project_dir(path: &Path) -> CliResult<PathBuf> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(CliError::ProjectNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn resolve_template_name(
    target: &TargetArgs,
    config: &AppConfig,
    allow_prompt: bool,
) -> CliResult<String> {
    if let Some(name) = &target.template {
        return Ok(name.clone());
    }

    let configured = config
        .defaults
        .template
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    if allow_prompt && std::io::stdin().is_terminal() {
        return prompt_template(configured);
    }

    configured.map(str::to_owned).ok_or(CliError::MissingTemplate)
}

#[cfg(feature = "interactive")]
fn prompt_template(preselected: Option<&str>) -> CliResult<String> {
    use dialoguer::{FuzzySelect, theme::ColorfulTheme};
    use kickstart_core::domain::Template;

    let items: Vec<String> = Template::ALL
        .iter()
        .map(|t| format!("{:<12} {}", t.as_str(), t.description()))
        .collect();
    let default = preselected
        .and_then(|name| Template::ALL.iter().position(|t| t.as_str() == name))
        .unwrap_or(0);

    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Kickstart template")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|e| CliError::InvalidInput {
            message: format!("template prompt failed: {e}"),
        })?;

    match choice {
        Some(index) => Ok(Template::ALL[index].as_str().to_owned()),
        None => Err(CliError::Cancelled),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_template(preselected: Option<&str>) -> CliResult<String> {
    preselected
        .map(str::to_owned)
        .ok_or(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use kickstart_adapters::bundled_stub_root;
    use kickstart_core::domain::Template;

    use super::*;

    fn target(project: &Path, template: Option<&str>) -> TargetArgs {
        TargetArgs {
            project: project.to_path_buf(),
            template: template.map(str::to_owned),
            teams: false,
            stubs: Some(bundled_stub_root()),
        }
    }

    #[test]
    fn flag_wins_over_config() {
        let dir = TempDir::new().unwrap();
        let ctx = build_context(&target(dir.path(), Some("podcast")), &AppConfig::default(), false)
            .unwrap();
        assert_eq!(ctx.template(), Template::Podcast);
    }

    #[test]
    fn config_default_fills_missing_flag() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.template = Some("phone-book".into());
        config.defaults.teams = true;

        let ctx = build_context(&target(dir.path(), None), &config, false).unwrap();
        assert_eq!(ctx.template(), Template::PhoneBook);
        assert!(ctx.using_teams());
    }

    #[test]
    fn no_template_anywhere_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.template = Some("  ".into());

        assert!(matches!(
            build_context(&target(dir.path(), None), &config, false),
            Err(CliError::MissingTemplate)
        ));
    }

    #[test]
    fn unknown_template_is_a_core_error() {
        let dir = TempDir::new().unwrap();
        let err = build_context(&target(dir.path(), Some("wiki")), &AppConfig::default(), false)
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("The wiki kickstart template does not exist"));
    }

    #[cfg(not(feature = "interactive"))]
    #[test]
    fn prompt_without_the_interactive_feature() {
        assert_eq!(prompt_template(Some("podcast")).unwrap(), "podcast");

        let err = prompt_template(None).unwrap_err();
        assert!(matches!(err, CliError::FeatureNotAvailable { feature: "interactive" }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_project_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = build_context(
            &target(&dir.path().join("absent"), Some("blog")),
            &AppConfig::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ProjectNotFound { .. }));
    }
}
