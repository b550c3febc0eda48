//! Batched line edits over a single load/rewrite cycle

use std::path::PathBuf;

use tracing::debug;

use crate::io::{self, RobustnessConfig};
use crate::store::{check_index, check_line, place_line};
use crate::{Error, Result};

/// An in-memory copy of a line file that is written back once.
///
/// Edits follow the same rules as the [`LineStore`](crate::LineStore)
/// primitives, so applying a sequence of `set`/`truncate` calls and then
/// [`commit`](Self::commit) leaves the same file as issuing the matching
/// per-call operations, at the cost of one rewrite instead of one per edit.
#[derive(Debug)]
pub struct LineBuffer {
    path: PathBuf,
    lines: Vec<String>,
    existed: bool,
    dirty: bool,
    robustness: RobustnessConfig,
}

impl LineBuffer {
    /// Load `path`. A missing file opens as an empty buffer.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (lines, existed) = match io::read_lines(&path) {
            Ok(lines) => (lines, true),
            Err(Error::NotFound { .. }) => (Vec::new(), false),
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            lines,
            existed,
            dirty: false,
            robustness: RobustnessConfig::default(),
        })
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// The buffered lines, including edits not yet committed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the file existed when the buffer was opened.
    pub fn existed(&self) -> bool {
        self.existed
    }

    /// Whether any edit is waiting to be committed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Line `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        check_index(index)?;
        Ok(self.lines.get(index - 1).map(String::as_str))
    }

    /// Set line `index`, padding with empty lines as needed.
    pub fn set(&mut self, index: usize, text: &str) -> Result<()> {
        check_index(index)?;
        check_line(index, text)?;
        place_line(&mut self.lines, index, text);
        self.dirty = true;
        Ok(())
    }

    /// Keep only the first `max_lines` lines.
    pub fn truncate(&mut self, max_lines: usize) -> Result<()> {
        if !self.existed && !self.dirty {
            return Err(Error::NotFound {
                path: self.path.clone(),
            });
        }
        if self.lines.len() < max_lines {
            return Err(Error::InsufficientLines {
                path: self.path.clone(),
                requested: max_lines,
                available: self.lines.len(),
            });
        }
        self.lines.truncate(max_lines);
        self.dirty = true;
        Ok(())
    }

    /// Write the buffer back. Returns `false` without touching the disk when
    /// nothing was edited.
    pub fn commit(self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        debug!(path = %self.path.display(), lines = self.lines.len(), "commit line buffer");
        io::write_lines(&self.path, &self.lines, self.robustness)?;
        Ok(true)
    }
}
