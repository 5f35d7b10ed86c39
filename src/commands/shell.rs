//! `flightpath shell` interactive menu
//!
//! Asks for a dataset file when none is configured, then loops over a
//! numbered menu until the user exits or input ends.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{route, stats};
use flightpath_core::config::RouterConfig;
use flightpath_core::dataset::Dataset;
use flightpath_core::error::{ExitCode, Result, RouteError};

const MENU: &str = "Please choose a following command:\n\
                    1:Show flight statistics\n\
                    2:Get the shortest route between two airports\n\
                    3:Exit the app";

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let preset = ctx.dataset_path().ok();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), &ctx.config)
        .quiet(ctx.cli.quiet)
        .run(preset)
}

pub struct Shell<'c, R, W> {
    input: R,
    out: W,
    config: &'c RouterConfig,
    quiet: bool,
    line: String,
}

impl<'c, R: BufRead, W: Write> Shell<'c, R, W> {
    pub fn new(input: R, out: W, config: &'c RouterConfig) -> Self {
        Self {
            input,
            out,
            config,
            quiet: false,
            line: String::new(),
        }
    }

    /// Skip the greeting and the "You selected" echoes
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the menu loop. A preset dataset that fails to load is an error;
    /// a typed file name that fails is re-prompted.
    pub fn run(&mut self, preset: Option<PathBuf>) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "Welcome to the Flight Router app.")?;
        }

        let dataset = match preset {
            Some(path) => Dataset::from_path(&path, self.config)?,
            None => match self.prompt_dataset()? {
                Some(dataset) => dataset,
                None => return self.exit(),
            },
        };

        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(command) = self.read_line()? else {
                return self.exit();
            };

            match command.as_str() {
                "1" => {
                    self.echo("You selected: Show flight statistics.")?;
                    stats::write_stats(&mut self.out, &dataset, OutputFormat::Human)?;
                    writeln!(self.out)?;
                }
                "2" => {
                    self.echo("You selected: Get the shortest route between two airports.")?;
                    if !self.query_route(&dataset)? {
                        return self.exit();
                    }
                }
                "3" => return self.exit(),
                _ => writeln!(self.out, "Error: Invalid command. Please enter 1, 2, or 3.")?,
            }
        }
    }

    /// Next trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }

    fn prompt_dataset(&mut self) -> Result<Option<Dataset>> {
        loop {
            write!(self.out, "Please enter a file: ")?;
            self.out.flush()?;
            let Some(file) = self.read_line()? else {
                writeln!(self.out)?;
                return Ok(None);
            };

            match Dataset::from_path(Path::new(&file), self.config) {
                Ok(dataset) => return Ok(Some(dataset)),
                Err(e) => {
                    tracing::debug!(file, error = %e, "dataset load failed");
                    writeln!(self.out, "Error: Please enter a valid file.")?;
                }
            }
        }
    }

    /// Prompt for two airports and print the route. Returns false at end of input.
    fn query_route(&mut self, dataset: &Dataset) -> Result<bool> {
        writeln!(self.out, "Please enter starting airport: ")?;
        let Some(start) = self.read_line()? else {
            return Ok(false);
        };
        writeln!(self.out, "Please enter destination airport: ")?;
        let Some(destination) = self.read_line()? else {
            return Ok(false);
        };

        if start == destination {
            writeln!(self.out, "Cannot fly to same airport")?;
            return Ok(true);
        }

        match route::find(dataset, &start, &destination) {
            Ok(found) => {
                route::write_route(
                    &mut self.out,
                    &found,
                    dataset.weight_label(),
                    OutputFormat::Human,
                )?;
                writeln!(self.out)?;
            }
            Err(RouteError::PathNotFound { .. }) => {
                writeln!(self.out, "No route from {} to {}\n", start, destination)?;
            }
            Err(e) if matches!(e.exit_code(), ExitCode::Data | ExitCode::Usage) => {
                writeln!(self.out, "Error: {}\n", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn echo(&mut self, message: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.out, "Exiting app.")?;
        Ok(())
    }
}
