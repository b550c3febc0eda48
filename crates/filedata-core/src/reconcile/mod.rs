//! Line list reconciliation
//!
//! [`ReconciliationPlan`] computes the writes and trim that take a file from a
//! previous line list to a desired one; [`Reconciler`] runs a plan through a
//! [`LineStore`](filedata_fs::LineStore).

mod engine;
mod plan;

pub use engine::{ApplyReport, Reconciler, apply_batched};
pub use plan::{LineWrite, ReconciliationPlan};
