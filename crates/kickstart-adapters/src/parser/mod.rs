//! Manifest parser adapters.

mod yaml;

pub use yaml::YamlManifestParser;
