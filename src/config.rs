//! Consumer-side configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the ticker client, read once at startup.
///
/// Lives at `<config-dir>/noticker/config.json`; keys are camelCase to
/// match the wire protocol. A missing or unparsable file falls back to
/// defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtlConfig {
    /// Replace an already-listed notification when a new one arrives
    /// carrying the same id, instead of listing both.
    pub replace_duplicates: bool,
}

impl CtlConfig {
    /// Load from config file, or return default if not found.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Well-known config location, `None` when no config directory can be
    /// resolved for the user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("noticker").join("config.json"))
    }
}
