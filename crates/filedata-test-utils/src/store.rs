//! [`LineStore`] wrappers that observe or sabotage calls.

use std::cell::{Cell, RefCell};
use std::path::Path;

use filedata_fs::{Error, LineStore, Result};

/// One call made through a [`RecordingStore`]. Paths are dropped; tests
/// in this workspace drive a single file per store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ReadLine(usize),
    WriteLine(usize, String),
    LineCount,
    TrimFile(usize),
    RemoveFile,
    ReadLines,
}

impl StoreCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::WriteLine(..) | Self::TrimFile(_) | Self::RemoveFile
        )
    }
}

/// Forwards to an inner store and records every call, failed or not.
pub struct RecordingStore<S> {
    inner: S,
    calls: RefCell<Vec<StoreCall>>,
}

impl<S: LineStore> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Only the calls that change the file.
    pub fn mutations(&self) -> Vec<StoreCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: StoreCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl<S: LineStore> LineStore for RecordingStore<S> {
    fn read_line(&self, path: &Path, index: usize) -> Result<Option<String>> {
        self.record(StoreCall::ReadLine(index));
        self.inner.read_line(path, index)
    }

    fn write_line(&self, path: &Path, index: usize, text: &str) -> Result<()> {
        self.record(StoreCall::WriteLine(index, text.to_owned()));
        self.inner.write_line(path, index, text)
    }

    fn line_count(&self, path: &Path) -> Result<usize> {
        self.record(StoreCall::LineCount);
        self.inner.line_count(path)
    }

    fn trim_file(&self, path: &Path, max_lines: usize) -> Result<()> {
        self.record(StoreCall::TrimFile(max_lines));
        self.inner.trim_file(path, max_lines)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.record(StoreCall::RemoveFile);
        self.inner.remove_file(path)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.record(StoreCall::ReadLines);
        self.inner.read_lines(path)
    }
}

/// Forwards to an inner store but fails the `n`th mutating call (1-based)
/// with an I/O error before it reaches the file.
pub struct FaultyStore<S> {
    inner: S,
    fail_at: usize,
    seen: Cell<usize>,
}

impl<S: LineStore> FaultyStore<S> {
    pub fn failing_at(inner: S, fail_at: usize) -> Self {
        Self {
            inner,
            fail_at,
            seen: Cell::new(0),
        }
    }

    /// Mutating calls seen so far, including the failed one.
    pub fn mutations_seen(&self) -> usize {
        self.seen.get()
    }

    fn gate(&self, path: &Path) -> Result<()> {
        let n = self.seen.get() + 1;
        self.seen.set(n);
        if n == self.fail_at {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("injected failure"),
            });
        }
        Ok(())
    }
}

impl<S: LineStore> LineStore for FaultyStore<S> {
    fn read_line(&self, path: &Path, index: usize) -> Result<Option<String>> {
        self.inner.read_line(path, index)
    }

    fn write_line(&self, path: &Path, index: usize, text: &str) -> Result<()> {
        self.gate(path)?;
        self.inner.write_line(path, index, text)
    }

    fn line_count(&self, path: &Path) -> Result<usize> {
        self.inner.line_count(path)
    }

    fn trim_file(&self, path: &Path, max_lines: usize) -> Result<()> {
        self.gate(path)?;
        self.inner.trim_file(path, max_lines)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.gate(path)?;
        self.inner.remove_file(path)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.inner.read_lines(path)
    }
}
