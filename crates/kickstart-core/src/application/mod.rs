//! Application layer for Kickstart.
//!
//! This layer contains:
//! - **Services**: Pipeline orchestration (Kickstart, Draft)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Path derivation,
//! manifest lookups and migration rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{Draft, Kickstart, KickstartSummary, ManifestState};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestParser};

pub use error::ApplicationError;
