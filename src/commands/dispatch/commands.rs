//! Command implementations for all flightpath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{route, shell, stats};
use flightpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Stats => stats::execute(ctx),
            Commands::Route { start, destination } => route::execute(ctx, start, destination),
            Commands::Shell => shell::execute(ctx),
        }
    }
}
