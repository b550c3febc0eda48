//! Command implementations for filedata-cli

pub mod apply;
pub mod destroy;
pub mod list;
pub mod plan;
pub mod show;

pub use apply::run_apply;
pub use destroy::run_destroy;
pub use list::run_list;
pub use plan::run_plan;
pub use show::run_show;
