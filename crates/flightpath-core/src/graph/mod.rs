//! Weighted graph storage and path-finding
//!
//! - `store`: directed graph keyed by node data, built incrementally
//! - `dijkstra`: single-source, single-target shortest paths
//! - `types`: edge weights, nodes, edges and path results

pub mod dijkstra;
pub mod store;
pub mod types;

pub use dijkstra::{compute_shortest_path, SearchTree};
pub use store::Graph;
pub use types::{Edge, Node, PathResult, Weight};
