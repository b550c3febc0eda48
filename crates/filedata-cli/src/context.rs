//! Resolved provider settings for a CLI invocation

use std::path::{Path, PathBuf};

use filedata_core::{FileResource, ProviderConfig, StateLedger};
use tracing::debug;

use crate::error::{CliError, Result};

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "filedata.toml";

/// Everything a command needs: configuration, the resource layer and the ledger.
pub struct Context {
    pub config: ProviderConfig,
    pub resource: FileResource,
}

impl Context {
    /// Resolve settings: config file, then environment, then `--base-path`.
    pub fn resolve(
        cwd: &Path,
        config_file: Option<&Path>,
        base_path: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::user(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                ProviderConfig::load(path)?
            }
            None => {
                let default = cwd.join(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    ProviderConfig::load(&default)?
                } else {
                    ProviderConfig::new(cwd)
                }
            }
        }
        .with_env_overrides();

        if let Some(base_path) = base_path {
            config.base_path = base_path;
        }
        if config.base_path.is_relative() {
            config.base_path = cwd.join(&config.base_path);
        }

        debug!(base_path = %config.base_path.display(), state = %config.state_path().display(), "resolved config");
        let resource = FileResource::from_config(&config);
        Ok(Self { config, resource })
    }

    pub fn load_ledger(&self) -> Result<StateLedger> {
        Ok(StateLedger::load_or_default(&self.config.state_path())?)
    }

    pub fn save_ledger(&self, ledger: &StateLedger) -> Result<()> {
        ledger.save(&self.config.state_path(), self.config.robustness())?;
        Ok(())
    }
}
