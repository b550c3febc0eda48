//! Validation for declared file resources

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Fewest lines a declared file may have.
pub const MIN_LINES: usize = 2;

static FILE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("Invalid file name regex"));

/// File names are restricted to lowercase ASCII letters and digits, which
/// keeps them a single path segment under the base directory.
pub fn validate_file_name(name: &str) -> Result<()> {
    if FILE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidFileName {
            name: name.to_string(),
        })
    }
}

pub fn validate_lines<S: AsRef<str>>(name: &str, lines: &[S]) -> Result<()> {
    if lines.len() < MIN_LINES {
        return Err(Error::TooFewLines {
            name: name.to_string(),
            count: lines.len(),
            min: MIN_LINES,
        });
    }
    if let Some(position) = lines
        .iter()
        .position(|l| l.as_ref().contains(['\n', '\r']))
    {
        return Err(Error::InvalidLine {
            name: name.to_string(),
            index: position + 1,
        });
    }
    Ok(())
}
