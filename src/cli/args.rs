//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vercheck - Check installed vendor applications for updates.
#[derive(Debug, Parser)]
#[command(name = "vercheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./vercheck.yml)
    #[arg(short, long, global = true, env = "VERCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare installed versions with the published ones (default)
    Check(CheckArgs),

    /// Show installed versions without going online
    Local(LocalArgs),

    /// List configured applications
    List(ListArgs),

    /// Write the default configuration to ./vercheck.yml
    Init(InitArgs),

    /// Print the JSON Schema of the configuration file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Check only these applications (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Use VERSION as the installed version of KEY (repeatable)
    #[arg(long = "set", value_name = "KEY=VERSION")]
    pub overrides: Vec<String>,

    /// Prompt for each installed version, pre-filled with the detected one
    #[arg(long)]
    pub manual: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Delay between applications in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 unless every application is current
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `local` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocalArgs {
    /// Show only these applications (comma-separated keys)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing vercheck.yml
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
