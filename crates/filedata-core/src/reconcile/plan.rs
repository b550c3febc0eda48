//! Reconciliation plans

use serde::Serialize;

/// Set line `index` (1-based) to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineWrite {
    pub index: usize,
    pub value: String,
}

impl LineWrite {
    /// True when the write lands past the end of the previous content.
    pub fn is_append(&self, previous_len: usize) -> bool {
        self.index > previous_len
    }
}

/// The minimal operations that move a file from one line list to another.
///
/// Writes are ordered by ascending index and come before the trim. Lines whose
/// value did not change produce no write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationPlan {
    writes: Vec<LineWrite>,
    trim: Option<usize>,
    previous_len: usize,
    target_len: usize,
}

impl ReconciliationPlan {
    /// Plan the move from `old` to `new`.
    pub fn between<O, N>(old: &[O], new: &[N]) -> Self
    where
        O: AsRef<str>,
        N: AsRef<str>,
    {
        let mut writes = Vec::new();
        for (i, value) in new.iter().enumerate() {
            let value: &str = value.as_ref();
            let unchanged = old
                .get(i)
                .is_some_and(|previous| AsRef::<str>::as_ref(previous) == value);
            if !unchanged {
                writes.push(LineWrite {
                    index: i + 1,
                    value: value.to_owned(),
                });
            }
        }

        let trim = (new.len() < old.len()).then_some(new.len());

        Self {
            writes,
            trim,
            previous_len: old.len(),
            target_len: new.len(),
        }
    }

    /// Plan a first write of `new` into a file with no prior content.
    pub fn initial<N: AsRef<str>>(new: &[N]) -> Self {
        Self::between::<&str, N>(&[], new)
    }

    pub fn writes(&self) -> &[LineWrite] {
        &self.writes
    }

    /// Length to trim the file to after the writes, if it must shrink.
    pub fn trim(&self) -> Option<usize> {
        self.trim
    }

    pub fn previous_len(&self) -> usize {
        self.previous_len
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Number of store calls the plan issues.
    pub fn operation_count(&self) -> usize {
        self.writes.len() + usize::from(self.trim.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.operation_count() == 0
    }
}
