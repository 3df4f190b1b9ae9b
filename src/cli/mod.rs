//! Command-line interface for vercheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InitArgs, ListArgs, LocalArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
