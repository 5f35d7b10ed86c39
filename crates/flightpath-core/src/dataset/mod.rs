//! Flight dataset loading
//!
//! A dataset is a DOT-style text file. Two line shapes matter; everything
//! else is ignored:
//!
//! ```text
//!     "AUS" [label="Austin"];
//!     "AUS" -- "BNA" [miles=753];
//! ```
//!
//! Node lines declare an airport. Connection lines declare a flight in both
//! directions (unless the config turns that off) and implicitly declare both
//! airports.

mod route;

use std::fs;
use std::path::Path;
use std::time::Instant;

use regex::Regex;

use crate::bail_invalid;
use crate::config::RouterConfig;
use crate::error::{Result, RouteError};
use crate::graph::Graph;

pub use route::{DatasetStats, Route};

/// Airport graph plus the totals needed for statistics
#[derive(Debug, Clone)]
pub struct Dataset {
    graph: Graph<String, u32>,
    total_miles: u64,
    weight_label: String,
}

/// Line patterns for one weight label. Codes, digits and separators are
/// ASCII only; anything else leaves the line unmatched.
struct LinePatterns {
    node: Regex,
    edge: Regex,
}

impl LinePatterns {
    fn new(weight_label: &str) -> Result<Self> {
        let node = Regex::new(r#"^[[:space:]]+"([[:word:]]+)"[[:space:]]\["#)
            .map_err(|e| RouteError::Other(format!("node pattern: {}", e)))?;
        let edge = Regex::new(&format!(
            r#"^[[:space:]]+"([[:word:]]+)"[[:space:]]--[[:space:]]"([[:word:]]+)"[[:space:]]\[{}=([[:digit:]]+)\];"#,
            regex::escape(weight_label)
        ))
        .map_err(|e| RouteError::invalid_value("weight_label", e))?;
        Ok(Self { node, edge })
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            graph: Graph::new(),
            total_miles: 0,
            weight_label: RouterConfig::default().weight_label,
        }
    }
}

impl Dataset {
    /// Read and parse a dataset file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path, config: &RouterConfig) -> Result<Self> {
        if !path.exists() {
            return Err(RouteError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, config)
    }

    /// Parse dataset text
    pub fn parse(content: &str, config: &RouterConfig) -> Result<Self> {
        let start = Instant::now();
        let patterns = LinePatterns::new(&config.weight_label)?;
        let mut dataset = Dataset {
            weight_label: config.weight_label.clone(),
            ..Default::default()
        };

        for (line_no, line) in content.lines().enumerate() {
            if let Some(caps) = patterns.edge.captures(line) {
                let from = caps[1].to_string();
                let to = caps[2].to_string();
                let Ok(weight) = caps[3].parse::<u32>() else {
                    bail_invalid!(
                        &config.weight_label,
                        format!("{} on line {}", &caps[3], line_no + 1)
                    );
                };
                dataset.add_connection(from, to, weight, config.bidirectional)?;
            } else if let Some(caps) = patterns.node.captures(line) {
                dataset.graph.insert_node(caps[1].to_string());
            }
        }

        crate::trace_time!(
            start,
            "parse_dataset",
            airports = dataset.graph.node_count(),
            flights = dataset.graph.edge_count()
        );
        Ok(dataset)
    }

    fn add_connection(
        &mut self,
        from: String,
        to: String,
        weight: u32,
        both_ways: bool,
    ) -> Result<()> {
        self.graph.insert_node(from.clone());
        self.graph.insert_node(to.clone());
        self.graph.insert_edge(from.clone(), to.clone(), weight)?;
        self.total_miles += u64::from(weight);
        if both_ways {
            self.graph.insert_edge(to, from, weight)?;
            self.total_miles += u64::from(weight);
        }
        Ok(())
    }

    /// Airport graph; weights are the per-flight mileage
    pub fn graph(&self) -> &Graph<String, u32> {
        &self.graph
    }

    /// Attribute name the weights were read from, e.g. `miles`
    pub fn weight_label(&self) -> &str {
        &self.weight_label
    }

    /// Airport, flight and mileage totals
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            airports: self.graph.node_count(),
            flights: self.graph.edge_count(),
            total_miles: self.total_miles,
        }
    }

    /// Cheapest route between two airports, with per-leg weights
    pub fn shortest_route(&self, start: &str, destination: &str) -> Result<Route> {
        let path = self
            .graph
            .shortest_path(&start.to_string(), &destination.to_string())?;

        let miles = path
            .nodes
            .windows(2)
            .map(|leg| self.graph.edge_weight(&leg[0], &leg[1]))
            .collect::<Result<Vec<u32>>>()?;
        let total_miles: u64 = miles.iter().copied().map(u64::from).sum();

        tracing::debug!(
            start,
            destination,
            hops = path.hops(),
            total_miles,
            "route found"
        );

        Ok(Route {
            route: path.nodes,
            miles,
            total_miles,
        })
    }
}
