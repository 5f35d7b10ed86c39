//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_dataset_path;
use crate::cli::Cli;
use flightpath_core::config::RouterConfig;
use flightpath_core::dataset::Dataset;
use flightpath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RouterConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RouterConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn dataset_path(&self) -> Result<PathBuf> {
        resolve_dataset_path(self.cli.data.as_deref(), &self.config)
    }

    /// Load the dataset named by `--data` or the config
    pub fn load_dataset(&self) -> Result<Dataset> {
        let path = self.dataset_path()?;
        let dataset = Dataset::from_path(&path, &self.config)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_dataset");
        Ok(dataset)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if ctx.cli.quiet {
            return Ok(());
        }
        println!("flightpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest flight routes between airports.");
        println!();
        println!("Run `flightpath --help` for usage information.");
        Ok(())
    }
}
