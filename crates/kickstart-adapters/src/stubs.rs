//! Locating the stub root shipped with the installer.
//!
//! The stub root is the directory that contains `kickstart/<template>/`.
//! Resolution order:
//!
//! 1. An explicit override (CLI flag or config file)
//! 2. `stubs/` next to the running executable
//! 3. The `stubs/` directory of this source tree

use std::path::{Path, PathBuf};

use tracing::debug;

use kickstart_core::{
    domain::{KICKSTART_STUB_DIR, Template},
    error::{KickstartError, KickstartResult},
};

/// `stubs/` at the root of this workspace.
pub fn bundled_stub_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("stubs")
}

/// Pick the first stub root that contains a `kickstart/` directory.
pub fn locate_stub_root(explicit: Option<&Path>) -> KickstartResult<PathBuf> {
    if let Some(root) = explicit {
        return if is_stub_root(root) {
            Ok(root.to_path_buf())
        } else {
            Err(KickstartError::Configuration {
                message: format!(
                    "'{}' has no {}/ directory",
                    root.display(),
                    KICKSTART_STUB_DIR
                ),
            })
        };
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("stubs")));

    beside_exe
        .into_iter()
        .chain(std::iter::once(bundled_stub_root()))
        .find(|candidate| {
            debug!(candidate = %candidate.display(), "Probing stub root");
            is_stub_root(candidate)
        })
        .ok_or_else(|| KickstartError::Configuration {
            message: "no kickstart stub directory found; set stubs.root or pass --stubs".into(),
        })
}

/// Templates whose stub directory is present under `root`.
pub fn available_templates(root: &Path) -> Vec<Template> {
    Template::ALL
        .into_iter()
        .filter(|t| root.join(KICKSTART_STUB_DIR).join(t.as_str()).is_dir())
        .collect()
}

fn is_stub_root(path: &Path) -> bool {
    path.join(KICKSTART_STUB_DIR).is_dir()
}
