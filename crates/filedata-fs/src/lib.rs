//! Line-addressable file storage for filedata
//!
//! Treats a flat text file as an ordered, 1-based array of lines. Every
//! mutating primitive loads the whole file, edits the line list in memory and
//! rewrites the file atomically.

pub mod buffer;
pub mod error;
pub mod io;
pub mod store;

pub use buffer::LineBuffer;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use store::{FsLineStore, LineStore};
