//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! kickstart pipeline.

pub mod draft;
pub mod kickstart_service;

pub use draft::{Draft, ManifestState};
pub use kickstart_service::{Kickstart, KickstartSummary};
