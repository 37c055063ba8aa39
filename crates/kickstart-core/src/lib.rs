//! Kickstart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for applying a
//! kickstart draft template to a freshly generated project, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          kickstart-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (Kickstart, Draft)             │
//! │        Sequences the pipeline           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, ManifestParser)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   kickstart-adapters (Infrastructure)   │
//! │ (LocalFilesystem, YamlManifestParser)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Template, Manifest, PathResolver, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kickstart_core::prelude::*;
//!
//! // 1. Validate the template and fix the run's inputs
//! let context = KickstartContext::from_name("./my-app", stub_root, "blog", false)?;
//!
//! // 2. Run the pipeline with injected adapters
//! let mut kickstart = Kickstart::new(context, filesystem, parser);
//! let summary = kickstart.run()?;
//!
//! if let Some(advisory) = summary.advisory {
//!     eprintln!("{advisory}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Draft, Kickstart, KickstartSummary,
        ports::{Filesystem, ManifestParser},
    };
    pub use crate::domain::{
        KickstartContext, Manifest, MigrationReport, PathResolver, Template,
    };
    pub use crate::error::{KickstartError, KickstartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
