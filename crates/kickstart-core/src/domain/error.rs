// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around and compare in tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("The {name} kickstart template does not exist")]
    InvalidTemplate {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid draft manifest: {reason}")]
    InvalidManifest { reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Seeder list could not be read from the draft manifest: {reason}")]
    SeederListUnreadable { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplate { name, available } => {
                let mut suggestions = vec![
                    format!("'{}' is not a kickstart template", name),
                    "Available templates:".into(),
                ];
                for template in available {
                    suggestions.push(format!("  • {}", template));
                }
                suggestions.push("Try: kickstart templates".into());
                suggestions
            }
            Self::InvalidManifest { reason } => vec![
                format!("The draft.yaml file is malformed: {}", reason),
                "Re-run kickstart apply to redeploy the manifest stub".into(),
            ],
            Self::SeederListUnreadable { .. } => vec![
                "The 'seeders' key is missing or is not a comma-separated string".into(),
                "Check the seeders entry in draft.yaml".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate { .. } => ErrorCategory::Validation,
            Self::InvalidManifest { .. } | Self::SeederListUnreadable { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_template_lists_the_catalog() {
        let err = DomainError::InvalidTemplate {
            name: "shop".into(),
            available: vec!["blog", "podcast"],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("blog")));
        assert!(suggestions.iter().any(|s| s.contains("podcast")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_template_message_names_the_template() {
        let err = DomainError::InvalidTemplate {
            name: "shop".into(),
            available: vec![],
        };
        assert_eq!(
            err.to_string(),
            "The shop kickstart template does not exist"
        );
    }
}
