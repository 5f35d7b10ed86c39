//! Flightpath Core Library
//!
//! Weighted graph store, Dijkstra shortest-path search and the flight
//! dataset loader behind the `flightpath` CLI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod logging;
pub mod map;
