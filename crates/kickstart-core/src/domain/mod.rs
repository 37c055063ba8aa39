// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kickstart.
//!
//! This module contains pure logic with no I/O. Reading, writing and listing
//! files is done through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: `KickstartContext` and `Template` never change once built
//! - **Single registry**: catalog membership and seeder names come from one table
//!
// Public API - what the world sees
pub mod catalog;
pub mod context;
pub mod error;
pub mod inflection;
pub mod manifest;
pub mod migrations;
pub mod paths;

// Re-exports for convenience
pub use catalog::{TEMPLATE_REGISTRY, Template, TemplateDef};
pub use context::KickstartContext;
pub use error::{DomainError, ErrorCategory};
pub use manifest::{Manifest, seeder_file_for};
pub use migrations::{MigrationPrerequisite, MigrationReport};
pub use paths::{KICKSTART_STUB_DIR, MANIFEST_FILE, PathResolver, TEAMS_SUFFIX};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    // ========================================================================
    // Cross-module Tests
    // ========================================================================

    #[test]
    fn seeder_stub_name_derives_from_the_registry() {
        for def in TEMPLATE_REGISTRY {
            let ctx = KickstartContext::new("/p", "/s", def.template, false);
            let paths = PathResolver::new(Arc::new(ctx));
            let stub = paths.seeder_stub_file();
            assert_eq!(
                stub.file_name().and_then(|n| n.to_str()),
                Some(format!("{}.php.stub", def.seeder_class).as_str())
            );
            assert!(stub.starts_with(paths.seeder_directory()));
        }
    }

    #[test]
    fn advisory_names_the_template_from_the_catalog() {
        let report = MigrationReport::scan(["x_create_teams_table.php"], true);
        let msg = report.advisory(Template::PhoneBook).unwrap();
        assert!(msg.starts_with("phone-book seeder bypassed"));
    }
}
