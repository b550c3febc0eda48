//! Plan execution against a line store

use std::path::Path;

use filedata_fs::{LineBuffer, LineStore, RobustnessConfig};
use serde::Serialize;
use tracing::{debug, trace};

use super::plan::ReconciliationPlan;
use crate::{Error, Result};

/// What an applied plan did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Lines written.
    pub writes: usize,
    /// Length the file was trimmed to, if it was.
    pub trimmed_to: Option<usize>,
}

impl ApplyReport {
    pub fn is_noop(&self) -> bool {
        self.writes == 0 && self.trimmed_to.is_none()
    }
}

/// Applies reconciliation plans through a [`LineStore`].
///
/// Operations run in plan order and the first failure stops the run. There
/// is no rollback: the file keeps whatever the completed prefix wrote, and
/// reconciling again from the file's actual content converges.
pub struct Reconciler<'a, S: LineStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: LineStore + ?Sized> Reconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Plan the move from `old` to `new` and apply it.
    pub fn reconcile<O, N>(&self, path: &Path, old: &[O], new: &[N]) -> Result<ApplyReport>
    where
        O: AsRef<str>,
        N: AsRef<str>,
    {
        self.apply(path, &ReconciliationPlan::between(old, new))
    }

    /// Apply `plan` with one store call per operation.
    pub fn apply(&self, path: &Path, plan: &ReconciliationPlan) -> Result<ApplyReport> {
        debug!(
            path = %path.display(),
            writes = plan.writes().len(),
            trim = ?plan.trim(),
            "applying reconciliation plan"
        );

        let mut report = ApplyReport::default();
        for write in plan.writes() {
            trace!(path = %path.display(), index = write.index, value = %write.value, "write line");
            self.store
                .write_line(path, write.index, &write.value)
                .map_err(|source| Error::Write {
                    index: write.index,
                    source,
                })?;
            report.writes += 1;
        }

        if let Some(length) = plan.trim() {
            self.store
                .trim_file(path, length)
                .map_err(|source| Error::Trim { length, source })?;
            report.trimmed_to = Some(length);
        }

        Ok(report)
    }
}

/// Apply `plan` through a single load and rewrite of the file.
///
/// Produces the same file as [`Reconciler::apply`] on success. An empty plan
/// does no I/O at all, and a failure leaves the file untouched.
pub fn apply_batched(
    path: &Path,
    plan: &ReconciliationPlan,
    robustness: RobustnessConfig,
) -> Result<ApplyReport> {
    if plan.is_empty() {
        return Ok(ApplyReport::default());
    }
    debug!(
        path = %path.display(),
        writes = plan.writes().len(),
        trim = ?plan.trim(),
        "applying batched reconciliation plan"
    );

    let mut buffer = LineBuffer::open(path)?.with_robustness(robustness);
    let mut report = ApplyReport::default();
    for write in plan.writes() {
        buffer
            .set(write.index, &write.value)
            .map_err(|source| Error::Write {
                index: write.index,
                source,
            })?;
        report.writes += 1;
    }
    if let Some(length) = plan.trim() {
        buffer
            .truncate(length)
            .map_err(|source| Error::Trim { length, source })?;
        report.trimmed_to = Some(length);
    }
    buffer.commit()?;
    Ok(report)
}
