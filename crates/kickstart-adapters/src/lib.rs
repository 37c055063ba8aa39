//! Infrastructure adapters for Kickstart.
//!
//! This crate implements the ports defined in `kickstart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod parser;
pub mod stubs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use parser::YamlManifestParser;
pub use stubs::{available_templates, bundled_stub_root, locate_stub_root};
