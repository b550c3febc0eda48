//! State ledger for managed files
//!
//! The ledger records the last-applied line list of every managed file. It is
//! the `old` side of each reconciliation and is persisted as TOML.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use filedata_fs::RobustnessConfig;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::resource::ManagedFile;
use crate::{Error, Result};

const LEDGER_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateLedger {
    /// Ledger format version for forward compatibility
    version: String,
    #[serde(default)]
    files: Vec<ManagedFile>,
}

impl Default for StateLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl StateLedger {
    pub fn new() -> Self {
        Self {
            version: LEDGER_VERSION.to_string(),
            files: Vec::new(),
        }
    }

    /// Load a ledger from a TOML file under a shared lock.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| filedata_fs::Error::io(path, e))?;
        file.lock_shared()
            .map_err(|_| filedata_fs::Error::LockFailed {
                path: path.to_path_buf(),
            })?;

        // Read through the locked handle
        let mut content = String::new();
        (&file)
            .read_to_string(&mut content)
            .map_err(|e| filedata_fs::Error::io(path, e))?;

        toml::from_str(&content).map_err(|e| Error::Ledger {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a ledger, or start an empty one if the file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Fs(e)) if e.is_not_found() => Ok(Self::new()),
            other => other,
        }
    }

    /// Save the ledger atomically.
    pub fn save(&self, path: &Path, robustness: RobustnessConfig) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Ledger {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        filedata_fs::io::write_atomic(path, content.as_bytes(), robustness)?;
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn files(&self) -> &[ManagedFile] {
        &self.files
    }

    pub fn get(&self, file_name: &str) -> Option<&ManagedFile> {
        self.files.iter().find(|f| f.file_name == file_name)
    }

    /// Record `state`, replacing any entry with the same file name.
    pub fn upsert(&mut self, state: ManagedFile) {
        match self.files.iter_mut().find(|f| f.file_name == state.file_name) {
            Some(existing) => *existing = state,
            None => self.files.push(state),
        }
    }

    /// Remove the entry for `file_name`, returning it if present.
    pub fn remove(&mut self, file_name: &str) -> Option<ManagedFile> {
        let pos = self.files.iter().position(|f| f.file_name == file_name)?;
        Some(self.files.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn managed(name: &str, lines: &[&str]) -> ManagedFile {
        ManagedFile::new(name, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn new_ledger_has_version() {
        assert_eq!(StateLedger::new().version(), "1.0");
    }

    #[test]
    fn upsert_replaces_by_name() {
        let mut ledger = StateLedger::new();
        ledger.upsert(managed("a", &["1", "2"]));
        ledger.upsert(managed("b", &["x", "y"]));
        ledger.upsert(managed("a", &["3", "4"]));

        assert_eq!(ledger.files().len(), 2);
        assert_eq!(ledger.get("a").unwrap().lines, vec!["3", "4"]);
    }

    #[test]
    fn remove_returns_entry() {
        let mut ledger = StateLedger::new();
        ledger.upsert(managed("a", &["1", "2"]));

        assert!(ledger.remove("a").is_some());
        assert!(ledger.remove("a").is_none());
        assert!(ledger.files().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".filedata").join("state.toml");

        let mut ledger = StateLedger::new();
        ledger.upsert(managed("file1", &["one", "", "three"]));
        ledger.save(&path, RobustnessConfig::default()).unwrap();

        let loaded = StateLedger::load(&path).unwrap();
        assert_eq!(loaded, ledger);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("version = \"1.0\""));
        assert!(raw.contains("file1"));
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = StateLedger::load_or_default(&dir.path().join("state.toml")).unwrap();
        assert!(ledger.files().is_empty());
    }

    #[test]
    fn load_rejects_corrupt_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "files = 3").unwrap();

        assert!(matches!(
            StateLedger::load(&path),
            Err(Error::Ledger { .. })
        ));
    }
}
