//! Provider configuration
//!
//! Settings come from a TOML file, then environment overrides, then whatever
//! the caller sets explicitly.
//!
//! ```toml
//! base_path = "/var/lib/filedata"
//! state_file = "/var/lib/filedata/.filedata/state.toml"  # optional
//! fsync = true                                          # optional
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use filedata_fs::RobustnessConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// Overrides `base_path` when set.
pub const BASE_PATH_ENV: &str = "FILEDATA_BASE_PATH";
/// Overrides `fsync` when set to a boolean-ish value.
pub const FSYNC_ENV: &str = "FILEDATA_FSYNC";

/// State ledger location relative to the base path.
pub const DEFAULT_STATE_FILE: &str = ".filedata/state.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Directory managed files live in.
    pub base_path: PathBuf,
    /// Explicit ledger path; defaults to [`DEFAULT_STATE_FILE`] under `base_path`.
    pub state_file: Option<PathBuf>,
    /// `fsync` rewritten files before they replace the originals.
    pub fsync: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            state_file: None,
            fsync: true,
        }
    }
}

impl ProviderConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| filedata_fs::Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_path) = lookup(BASE_PATH_ENV).filter(|v| !v.is_empty()) {
            self.base_path = PathBuf::from(base_path);
        }
        if let Some(raw) = lookup(FSYNC_ENV) {
            match parse_flag(&raw) {
                Some(fsync) => self.fsync = fsync,
                None => warn!(variable = FSYNC_ENV, value = %raw, "ignoring unrecognised boolean"),
            }
        }
        self
    }

    /// Where the state ledger is kept.
    pub fn state_path(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| self.base_path.join(DEFAULT_STATE_FILE))
    }

    pub fn robustness(&self) -> RobustnessConfig {
        RobustnessConfig {
            enable_fsync: self.fsync,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
