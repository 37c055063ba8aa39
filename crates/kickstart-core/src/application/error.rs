//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the kickstart pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The draft manifest is not deployed in the project.
    #[error("The draft file does not exist in project: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The deployed manifest could not be parsed.
    #[error("Failed to parse draft manifest {path}: {reason}")]
    ManifestParseFailed { path: PathBuf, reason: String },

    /// The template ships no seeder stub.
    #[error("The seeder stub does not exist: {path}")]
    SeederStubNotFound { path: PathBuf },

    /// The template seeder could not be written into the project.
    #[error("The seeder file could not be created at {path}: {reason}")]
    SeederWriteFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestNotFound { path } => vec![
                format!("Expected the manifest at: {}", path.display()),
                "Deploy the manifest first: kickstart apply <PROJECT> --template <NAME>".into(),
            ],
            Self::ManifestParseFailed { path, .. } => vec![
                format!("Check the YAML syntax of {}", path.display()),
                "Re-run kickstart apply to restore the original manifest".into(),
            ],
            Self::SeederStubNotFound { path } => vec![
                format!("Missing stub: {}", path.display()),
                "Check the stub root (--stubs or stubs.root in the config file)".into(),
            ],
            Self::SeederWriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Ensure database/seeders exists in the project".into(),
                "Check that you have write permissions".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } | Self::SeederStubNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ManifestParseFailed { .. } => ErrorCategory::Validation,
            Self::SeederWriteFailed { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
