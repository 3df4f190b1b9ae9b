//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]. Running `vercheck`
//! without a subcommand is the same as `vercheck check`.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod init;
pub mod list;
pub mod local;
pub mod schema;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
