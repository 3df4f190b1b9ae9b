//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where commands find their configuration.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory searched for `vercheck.yml`
    pub working_dir: PathBuf,
    /// Explicit `--config` path
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(working_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            config_path,
        }
    }

    /// Load and validate the configuration.
    pub fn load_config(&self) -> Result<crate::config::LoadedConfig> {
        crate::config::load_config(self.config_path.as_deref(), &self.working_dir)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(working_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            context: CommandContext::new(working_dir, config_path),
        }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.context.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = self.context.clone();
        match &cli.command {
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Local(args)) => {
                super::local::LocalCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Init(args)) => {
                super::init::InitCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::check::CheckCommand::new(context, CheckArgs::default()).execute(ui),
        }
    }
}
