//! CLI command handlers, one file per command.

mod check;
mod export;
mod resolve;
mod show;

pub use check::run_check;
pub use export::run_export;
pub(crate) use resolve::resolve_once;
pub use resolve::run_resolve;
pub use show::run_show;
