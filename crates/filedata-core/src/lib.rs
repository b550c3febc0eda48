//! Reconciliation and file resource lifecycle for filedata
//!
//! Sits between callers that declare "this file should hold these lines" and
//! the line store in `filedata-fs`:
//!
//! - [`reconcile`] — minimal write/trim plans and their execution
//! - [`resource`] — create, read, update and delete of files under a base path
//! - [`ledger`] — persisted last-applied state
//! - [`config`] — provider configuration

pub mod config;
pub mod error;
pub mod ledger;
pub mod reconcile;
pub mod resource;
pub mod validation;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use ledger::StateLedger;
pub use reconcile::{ApplyReport, LineWrite, ReconciliationPlan, Reconciler, apply_batched};
pub use resource::{FileResource, ManagedFile};
