//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KICKSTART_DEFAULTS__TEMPLATE=blog`,
//!    `KICKSTART_STUBS__ROOT=/opt/stubs`, ...
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a flag is omitted.
    pub defaults: Defaults,
    /// Stub lookup.
    pub stubs: StubsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub template: Option<String>,
    pub teams: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Stub root override; the bundled stubs are used when unset.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: Some("blog".into()),
            teams: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            stubs: StubsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist unless `allow_missing` is set;
    /// the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, allow_missing: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), !allow_missing),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Environment::with_prefix("KICKSTART"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.to_path_buf()).required(required))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kickstart.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kickstart", "kickstart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kickstart.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix("KICKSTART").source(Some(HashMap::new()))
    }

    #[test]
    fn default_template_is_blog() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.template.as_deref(), Some("blog"));
        assert!(!cfg.defaults.teams);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("none.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ntemplate = \"podcast\"\nteams = true\n\n[stubs]\nroot = \"/opt/stubs\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("podcast"));
        assert!(cfg.defaults.teams);
        assert_eq!(cfg.stubs.root, Some(PathBuf::from("/opt/stubs")));
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let env = Environment::with_prefix("KICKSTART").source(Some(HashMap::from([
            ("KICKSTART_DEFAULTS__TEMPLATE".to_string(), "phone-book".to_string()),
            ("KICKSTART_DEFAULTS__TEAMS".to_string(), "true".to_string()),
        ])));

        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, env).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("phone-book"));
        assert!(cfg.defaults.teams);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
