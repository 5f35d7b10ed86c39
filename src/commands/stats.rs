//! `flightpath stats` command

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use flightpath_core::dataset::Dataset;
use flightpath_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), &dataset, ctx.cli.format)
}

/// Write dataset totals in the requested format
pub fn write_stats(out: &mut impl Write, dataset: &Dataset, format: OutputFormat) -> Result<()> {
    let stats = dataset.stats();
    match format {
        OutputFormat::Human => writeln!(out, "{}", stats)?,
        OutputFormat::Json => {
            let json = serde_json::json!({
                "airports": stats.airports,
                "flights": stats.flights,
                "total_miles": stats.total_miles,
                "weight_label": dataset.weight_label(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}
