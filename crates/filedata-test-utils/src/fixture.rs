//! [`LineFixture`] for tests that work on real line files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary base directory with helpers to seed and inspect line files.
///
/// ```rust,no_run
/// use filedata_test_utils::LineFixture;
///
/// let fixture = LineFixture::new();
/// let path = fixture.seed("config", &["a", "b"]);
/// assert_eq!(fixture.lines("config"), vec!["a", "b"]);
/// # let _ = path;
/// ```
pub struct LineFixture {
    temp_dir: TempDir,
}

impl Default for LineFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("LineFixture::new: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `name` inside the fixture, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `lines` newline-terminated to `name`.
    pub fn seed(&self, name: &str, lines: &[&str]) -> PathBuf {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        self.write_raw(name, &content)
    }

    /// Write `content` verbatim to `name`.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("LineFixture::write_raw({name}): {e}"));
        path
    }

    pub fn read_raw(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("LineFixture::read_raw({name}): {e}"))
    }

    pub fn lines(&self, name: &str) -> Vec<String> {
        self.read_raw(name).lines().map(str::to_owned).collect()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    pub fn assert_lines(&self, name: &str, expected: &[&str]) {
        let actual = self.lines(name);
        assert_eq!(actual, expected, "unexpected lines in {name}");
    }
}
