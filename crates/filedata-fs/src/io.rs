//! Whole-file line I/O with atomic rewrites

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Knobs for the rewrite path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// `fsync` the temp file before renaming it over the target.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self { enable_fsync: true }
    }
}

/// Split file content into its line list.
///
/// A trailing `\r` is dropped from each line and a final line without a
/// terminating newline still counts. Empty content has no lines.
pub fn parse_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_owned).collect()
}

/// Render a line list with every line terminated by a single `\n`.
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Load the full line list of an existing file.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_lines(&content))
}

/// Load the full line list, treating a missing file as empty.
pub fn read_lines_or_empty(path: &Path) -> Result<Vec<String>> {
    match read_lines(path) {
        Err(Error::NotFound { .. }) => Ok(Vec::new()),
        other => other,
    }
}

/// Rewrite a file so it holds exactly `lines`.
pub fn write_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
    config: RobustnessConfig,
) -> Result<()> {
    write_atomic(path, render_lines(lines).as_bytes(), config)
}

/// Write content atomically to a file.
///
/// Content goes to a sibling temp file under an exclusive advisory lock and is
/// then renamed over the target, so readers see either the old or the new
/// file. The temp file is removed if any step fails.
///
/// An existing target keeps its permissions, and a symlinked target is
/// resolved so the rename replaces the file the link points at.
pub fn write_atomic(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let target = resolve_target(path)?;
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let permissions = match fs::metadata(&target) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&target, e)),
    };

    let temp_path = temp_path_for(&target);
    let result = write_temp(&target, &temp_path, content, permissions, config)
        .and_then(|()| fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// The real file behind `path`; a path that does not exist yet is used as is.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| Error::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn write_temp(
    target: &Path,
    temp_path: &Path,
    content: &[u8],
    permissions: Option<fs::Permissions>,
    config: RobustnessConfig,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    if config.enable_fsync {
        temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}

/// `.{name}.{pid}.tmp` next to the target, so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}
