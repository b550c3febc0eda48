//! Managed file resources
//!
//! A [`FileResource`] maps a declared file (name plus ordered lines) to a path
//! under its base directory and drives the line store through create, read,
//! update and delete.

use std::path::{Path, PathBuf};

use filedata_fs::{FsLineStore, LineStore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::reconcile::{ApplyReport, ReconciliationPlan, Reconciler};
use crate::validation::{validate_file_name, validate_lines};
use crate::{Error, Result};

/// A file name and the ordered lines it should contain.
///
/// Used both for declarations and for recorded state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedFile {
    pub file_name: String,
    pub lines: Vec<String>,
}

impl ManagedFile {
    pub fn new(file_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            lines,
        }
    }

    /// Check the name and lines a declaration must satisfy.
    pub fn validate(&self) -> Result<()> {
        validate_file_name(&self.file_name)?;
        validate_lines(&self.file_name, &self.lines)
    }
}

/// Lifecycle operations for files under one base directory.
pub struct FileResource<S = FsLineStore> {
    base_path: PathBuf,
    store: S,
}

impl FileResource<FsLineStore> {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_store(base_path, FsLineStore::new())
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::with_store(
            config.base_path.clone(),
            FsLineStore::with_robustness(config.robustness()),
        )
    }
}

impl<S: LineStore> FileResource<S> {
    pub fn with_store(base_path: impl Into<PathBuf>, store: S) -> Self {
        Self {
            base_path: base_path.into(),
            store,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Path of `file_name` under the base directory.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Plan what applying `desired` would do, given the recorded `state`.
    ///
    /// With no state the plan is computed against the file as it currently
    /// exists on disk, which is also what [`create`](Self::create) does.
    pub fn plan(
        &self,
        state: Option<&ManagedFile>,
        desired: &ManagedFile,
    ) -> Result<ReconciliationPlan> {
        desired.validate()?;
        match state {
            Some(state) => Ok(ReconciliationPlan::between(&state.lines, &desired.lines)),
            None => {
                let existing = self.existing_lines(&desired.file_name)?;
                Ok(ReconciliationPlan::between(&existing, &desired.lines))
            }
        }
    }

    /// Write a new file with every declared line.
    ///
    /// If a file with that name is already on disk it is adopted and
    /// reconciled, so the result holds exactly the declared lines.
    pub fn create(&self, desired: &ManagedFile) -> Result<ManagedFile> {
        desired.validate()?;
        let path = self.path_for(&desired.file_name);

        let existing = self.existing_lines(&desired.file_name)?;
        if !existing.is_empty() {
            info!(path = %path.display(), lines = existing.len(), "adopting existing file");
        }

        let report = Reconciler::new(&self.store).reconcile(&path, &existing, &desired.lines)?;
        info!(path = %path.display(), writes = report.writes, "file created");
        Ok(desired.clone())
    }

    /// Refresh `state` from disk.
    ///
    /// Returns `Ok(None)` when the file no longer exists.
    pub fn read(&self, state: &ManagedFile) -> Result<Option<ManagedFile>> {
        let path = self.path_for(&state.file_name);

        let count = match self.store.line_count(&path) {
            Ok(count) => count,
            Err(e) if e.is_not_found() => {
                warn!(path = %path.display(), "managed file no longer exists");
                return Ok(None);
            }
            Err(source) => return Err(Error::Read { source }),
        };

        let mut lines = Vec::with_capacity(count);
        for index in 1..=count {
            let line = self
                .store
                .read_line(&path, index)
                .map_err(|source| Error::Read { source })?;
            lines.push(line.unwrap_or_default());
        }

        Ok(Some(ManagedFile::new(state.file_name.clone(), lines)))
    }

    /// Reconcile the file from the recorded `state` to `desired`.
    ///
    /// The file name of `state` is kept; renames are not an update.
    pub fn update(&self, state: &ManagedFile, desired: &ManagedFile) -> Result<ManagedFile> {
        validate_lines(&state.file_name, &desired.lines)?;
        let path = self.path_for(&state.file_name);

        let report: ApplyReport =
            Reconciler::new(&self.store).reconcile(&path, &state.lines, &desired.lines)?;
        info!(
            path = %path.display(),
            writes = report.writes,
            trimmed_to = ?report.trimmed_to,
            "file updated"
        );

        Ok(ManagedFile::new(state.file_name.clone(), desired.lines.clone()))
    }

    /// Remove the file.
    ///
    /// A file that is already gone counts as deleted, the same way
    /// [`read`](Self::read) treats it as a resource that no longer exists.
    pub fn delete(&self, state: &ManagedFile) -> Result<()> {
        let path = self.path_for(&state.file_name);
        match self.store.remove_file(&path) {
            Ok(()) => info!(path = %path.display(), "file deleted"),
            Err(e) if e.is_not_found() => {
                warn!(path = %path.display(), "managed file already removed");
            }
            Err(source) => return Err(Error::Delete { source }),
        }
        Ok(())
    }

    fn existing_lines(&self, file_name: &str) -> Result<Vec<String>> {
        match self.store.read_lines(&self.path_for(file_name)) {
            Ok(lines) => Ok(lines),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(source) => Err(Error::Read { source }),
        }
    }
}
