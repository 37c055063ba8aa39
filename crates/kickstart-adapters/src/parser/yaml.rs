//! YAML manifest parser backed by `serde_yaml`.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use kickstart_core::{
    application::{ApplicationError, ports::ManifestParser},
    domain::Manifest,
    error::KickstartResult,
};

/// Parses `draft.yaml` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestParser;

impl YamlManifestParser {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestParser for YamlManifestParser {
    #[instrument(skip(self, source), fields(origin = %origin.display()))]
    fn parse(&self, source: &str, origin: &Path) -> KickstartResult<Manifest> {
        // Deserialising straight into a JSON value keeps mapping order and
        // rejects non-string keys, which a manifest never has.
        let value: Value =
            serde_yaml::from_str(source).map_err(|e| ApplicationError::ManifestParseFailed {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        let manifest = Manifest::new(value)?;
        debug!(models = manifest.models().len(), "Manifest parsed");
        Ok(manifest)
    }
}
