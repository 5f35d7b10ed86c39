use serde::Serialize;
use std::fmt;

/// Shortest route between two airports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Airports in travel order, start and destination included
    pub route: Vec<String>,
    /// Weight of each leg; `miles[i]` is the leg `route[i] -> route[i + 1]`
    pub miles: Vec<u32>,
    pub total_miles: u64,
}

impl Route {
    /// Legs as (from, to, miles)
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.route
            .windows(2)
            .zip(&self.miles)
            .map(|(pair, miles)| (pair[0].as_str(), pair[1].as_str(), *miles))
    }
}

/// Dataset totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetStats {
    pub airports: usize,
    /// Directed flights; each undirected connection counts twice
    pub flights: usize,
    pub total_miles: u64,
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of airports: {}", self.airports)?;
        writeln!(f, "Number of flights: {}", self.flights)?;
        write!(f, "Total Miles for All Flights: {}", self.total_miles)
    }
}
