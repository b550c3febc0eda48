//! Per-call line primitives
//!
//! [`LineStore`] is the seam the reconciler and the resource layer talk to.
//! [`FsLineStore`] is the filesystem implementation: each call is a complete,
//! synchronous read-modify-write cycle with no state kept between calls.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::io::{self, RobustnessConfig};
use crate::{Error, Result};

/// Line-addressable storage over flat text files. Indices are 1-based.
pub trait LineStore {
    /// Read line `index`.
    ///
    /// Returns `Ok(None)` when the file exists but has fewer than `index`
    /// lines, and [`Error::NotFound`] when the file itself is missing.
    fn read_line(&self, path: &Path, index: usize) -> Result<Option<String>>;

    /// Set line `index` to `text`, creating the file and padding with empty
    /// lines as needed. All other lines are kept as they are.
    fn write_line(&self, path: &Path, index: usize, text: &str) -> Result<()>;

    /// Number of lines in the file.
    fn line_count(&self, path: &Path) -> Result<usize>;

    /// Keep only the first `max_lines` lines.
    ///
    /// Fails with [`Error::InsufficientLines`] if the file is shorter than
    /// `max_lines`, leaving it untouched.
    fn trim_file(&self, path: &Path, max_lines: usize) -> Result<()>;

    /// Delete the file.
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Load every line of the file.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Filesystem-backed [`LineStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineStore {
    robustness: RobustnessConfig,
}

impl FsLineStore {
    /// Create a store with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with custom robustness settings.
    pub fn with_robustness(robustness: RobustnessConfig) -> Self {
        Self { robustness }
    }

    fn open(path: &Path) -> Result<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| Error::io(path, e))
    }
}

impl LineStore for FsLineStore {
    fn read_line(&self, path: &Path, index: usize) -> Result<Option<String>> {
        check_index(index)?;
        debug!(path = %path.display(), index, "read_line");

        let reader = Self::open(path)?;
        for (position, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(path, e))?;
            if position + 1 == index {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn write_line(&self, path: &Path, index: usize, text: &str) -> Result<()> {
        check_index(index)?;
        check_line(index, text)?;
        debug!(path = %path.display(), index, "write_line");

        let mut lines = io::read_lines_or_empty(path)?;
        place_line(&mut lines, index, text);
        io::write_lines(path, &lines, self.robustness)
    }

    fn line_count(&self, path: &Path) -> Result<usize> {
        let reader = Self::open(path)?;
        let mut count = 0;
        for line in reader.lines() {
            line.map_err(|e| Error::io(path, e))?;
            count += 1;
        }
        debug!(path = %path.display(), count, "line_count");
        Ok(count)
    }

    fn trim_file(&self, path: &Path, max_lines: usize) -> Result<()> {
        debug!(path = %path.display(), max_lines, "trim_file");

        let mut lines = io::read_lines(path)?;
        if lines.len() < max_lines {
            return Err(Error::InsufficientLines {
                path: path.to_path_buf(),
                requested: max_lines,
                available: lines.len(),
            });
        }
        lines.truncate(max_lines);
        io::write_lines(path, &lines, self.robustness)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "remove_file");
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        io::read_lines(path)
    }
}

pub(crate) fn check_index(index: usize) -> Result<()> {
    if index == 0 {
        return Err(Error::InvalidIndex { index });
    }
    Ok(())
}

pub(crate) fn check_line(index: usize, text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(Error::InvalidLine { index });
    }
    Ok(())
}

/// Pad `lines` with empty strings up to `index - 1` and set line `index`.
pub(crate) fn place_line(lines: &mut Vec<String>, index: usize, text: &str) {
    if lines.len() < index {
        lines.resize(index, String::new());
    }
    lines[index - 1] = text.to_owned();
}
