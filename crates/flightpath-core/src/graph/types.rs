use serde::Serialize;
use std::fmt::{Debug, Display};

/// Numeric edge weight
///
/// Any primitive numeric type qualifies. Search accumulates weights as `f64`
/// regardless of the stored representation.
pub trait Weight: Copy + PartialOrd + Debug + Display {
    fn to_f64(self) -> f64;
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Whether a weight is usable by Dijkstra (non-negative and not NaN)
pub fn is_valid_weight<W: Weight>(weight: W) -> bool {
    let value = weight.to_f64();
    !value.is_nan() && value >= 0.0
}

/// Directed edge to `successor`
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N, W> {
    pub successor: N,
    pub weight: W,
}

/// A graph vertex: its outgoing edges plus the identifiers of nodes with an
/// edge pointing here
#[derive(Debug, Clone)]
pub struct Node<N, W> {
    pub(crate) edges_out: Vec<Edge<N, W>>,
    pub(crate) predecessors: Vec<N>,
}

impl<N, W> Default for Node<N, W> {
    fn default() -> Self {
        Self {
            edges_out: Vec::new(),
            predecessors: Vec::new(),
        }
    }
}

impl<N: PartialEq, W> Node<N, W> {
    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge<N, W>] {
        &self.edges_out
    }

    pub fn out_degree(&self) -> usize {
        self.edges_out.len()
    }

    pub(crate) fn edge_to(&self, successor: &N) -> Option<&Edge<N, W>> {
        self.edges_out.iter().find(|e| &e.successor == successor)
    }

    pub(crate) fn edge_to_mut(&mut self, successor: &N) -> Option<&mut Edge<N, W>> {
        self.edges_out.iter_mut().find(|e| &e.successor == successor)
    }
}

/// Outcome of a shortest-path search: nodes from start to end inclusive and
/// the summed edge weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub nodes: Vec<N>,
    pub cost: f64,
}

impl<N> PathResult<N> {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
