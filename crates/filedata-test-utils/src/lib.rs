//! Shared test utilities for the filedata workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`fixture`] — [`LineFixture`], a temp directory of line files
//! - [`store`] — [`RecordingStore`] and [`FaultyStore`] wrappers around any
//!   [`LineStore`](filedata_fs::LineStore)

pub mod fixture;
pub mod store;

pub use fixture::LineFixture;
pub use store::{FaultyStore, RecordingStore, StoreCall};
