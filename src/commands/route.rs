//! `flightpath route` command

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use flightpath_core::bail_usage;
use flightpath_core::dataset::{Dataset, Route};
use flightpath_core::error::Result;

pub fn execute(ctx: &CommandContext, start: &str, destination: &str) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let route = find(&dataset, start, destination)?;
    let stdout = io::stdout();
    write_route(
        &mut stdout.lock(),
        &route,
        dataset.weight_label(),
        ctx.cli.format,
    )
}

/// Look up the cheapest route, rejecting blank airport codes
pub fn find(dataset: &Dataset, start: &str, destination: &str) -> Result<Route> {
    if start.trim().is_empty() || destination.trim().is_empty() {
        bail_usage!("airport codes must not be empty");
    }
    dataset.shortest_route(start.trim(), destination.trim())
}

/// Write a route with per-leg weights and the total
pub fn write_route(
    out: &mut impl Write,
    route: &Route,
    weight_label: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if let (Some(first), Some(last)) = (route.route.first(), route.route.last()) {
                writeln!(out, "Shortest route from {} to {}:", first, last)?;
            }
            for (from, to, weight) in route.legs() {
                writeln!(out, "From {} to {}: {} {}", from, to, weight, weight_label)?;
            }
            writeln!(
                out,
                "Total number of {} from start is: {}",
                weight_label, route.total_miles
            )?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(route)?)?;
        }
    }
    Ok(())
}
