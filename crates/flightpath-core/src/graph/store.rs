//! Directed weighted graph keyed by node data

use std::collections::HashMap;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::error::{Result, RouteError};
use crate::graph::types::{is_valid_weight, Edge, Node, Weight};
use crate::map::KeyValueMap;

/// Directed graph whose nodes are identified by their data.
///
/// `M` is the node index. It defaults to a `HashMap`; any [`KeyValueMap`]
/// works, e.g. a `BTreeMap` when deterministic node listing matters.
#[derive(Debug, Clone)]
pub struct Graph<N, W, M = HashMap<N, Node<N, W>>> {
    nodes: M,
    edge_count: usize,
    _marker: PhantomData<(N, W)>,
}

impl<N, W, M> Default for Graph<N, W, M>
where
    M: Default,
{
    fn default() -> Self {
        Self {
            nodes: M::default(),
            edge_count: 0,
            _marker: PhantomData,
        }
    }
}

impl<N, W, M> Graph<N, W, M>
where
    M: KeyValueMap<N, Node<N, W>> + Default,
{
    /// Empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N, W, M> Graph<N, W, M>
where
    N: Clone + PartialEq + Debug,
    W: Weight,
    M: KeyValueMap<N, Node<N, W>>,
{
    /// Build a graph on top of an existing (empty) node index
    pub fn with_map(nodes: M) -> Self {
        debug_assert!(nodes.is_empty(), "node index must start empty");
        Self {
            nodes,
            edge_count: 0,
            _marker: PhantomData,
        }
    }

    /// Insert a node. Returns `false` and leaves the existing node (and its
    /// edges) untouched when `data` is already present.
    pub fn insert_node(&mut self, data: N) -> bool {
        if self.nodes.contains_key(&data) {
            return false;
        }
        self.nodes.put(data, Node::default());
        true
    }

    /// Remove a node together with every edge into or out of it
    pub fn remove_node(&mut self, data: &N) -> Result<()> {
        let node = self
            .nodes
            .remove(data)
            .map_err(|_| RouteError::node_not_found(data))?;

        for edge in &node.edges_out {
            if &edge.successor == data {
                continue;
            }
            if let Ok(succ) = self.nodes.get_mut(&edge.successor) {
                succ.predecessors.retain(|p| p != data);
            }
        }
        self.edge_count -= node.edges_out.len();

        for pred in node.predecessors.iter().filter(|p| *p != data) {
            if let Ok(pred_node) = self.nodes.get_mut(pred) {
                let before = pred_node.edges_out.len();
                pred_node.edges_out.retain(|e| &e.successor != data);
                self.edge_count -= before - pred_node.edges_out.len();
            }
        }

        tracing::trace!(node = ?data, edges = self.edge_count, "remove_node");
        Ok(())
    }

    /// Insert the directed edge `pred -> succ`, overwriting the weight if the
    /// edge already exists. Returns whether a new edge was created.
    pub fn insert_edge(&mut self, pred: N, succ: N, weight: W) -> Result<bool> {
        self.require_node(&pred)?;
        self.require_node(&succ)?;
        if !is_valid_weight(weight) {
            return Err(RouteError::InvalidWeight {
                from: format!("{:?}", pred),
                to: format!("{:?}", succ),
                weight: weight.to_string(),
            });
        }

        let pred_node = self.nodes.get_mut(&pred)?;
        if let Some(existing) = pred_node.edge_to_mut(&succ) {
            existing.weight = weight;
            return Ok(false);
        }
        pred_node.edges_out.push(Edge {
            successor: succ.clone(),
            weight,
        });

        self.nodes.get_mut(&succ)?.predecessors.push(pred);
        self.edge_count += 1;
        Ok(true)
    }

    /// Remove the directed edge `pred -> succ`, returning its weight
    pub fn remove_edge(&mut self, pred: &N, succ: &N) -> Result<W> {
        self.require_node(pred)?;
        self.require_node(succ)?;

        let pred_node = self.nodes.get_mut(pred)?;
        let pos = pred_node
            .edges_out
            .iter()
            .position(|e| &e.successor == succ)
            .ok_or_else(|| RouteError::edge_not_found(pred, succ))?;
        let removed = pred_node.edges_out.remove(pos);

        let succ_node = self.nodes.get_mut(succ)?;
        if let Some(idx) = succ_node.predecessors.iter().position(|p| p == pred) {
            succ_node.predecessors.swap_remove(idx);
        }

        self.edge_count -= 1;
        Ok(removed.weight)
    }

    /// Whether a node with this data exists
    pub fn contains_node(&self, data: &N) -> bool {
        self.nodes.contains_key(data)
    }

    /// Whether the directed edge `pred -> succ` exists; missing endpoints
    /// count as no edge
    pub fn contains_edge(&self, pred: &N, succ: &N) -> bool {
        self.nodes
            .get(pred)
            .is_ok_and(|node| node.edge_to(succ).is_some())
    }

    /// Weight of the directed edge `pred -> succ`
    pub fn edge_weight(&self, pred: &N, succ: &N) -> Result<W> {
        self.node(pred)?
            .edge_to(succ)
            .map(|e| e.weight)
            .ok_or_else(|| RouteError::edge_not_found(pred, succ))
    }

    /// Outgoing edges of `data` in insertion order
    pub fn edges_from(&self, data: &N) -> Result<&[Edge<N, W>]> {
        Ok(self.node(data)?.edges())
    }

    /// Direct successors of `data` in insertion order
    pub fn successors(&self, data: &N) -> Result<impl Iterator<Item = &N> + '_> {
        Ok(self.node(data)?.edges().iter().map(|e| &e.successor))
    }

    /// The node stored under `data`, or `NodeNotFound`
    pub fn node(&self, data: &N) -> Result<&Node<N, W>> {
        self.nodes
            .get(data)
            .map_err(|_| RouteError::node_not_found(data))
    }

    /// Node identifiers, in the order of the backing index
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.size()
    }

    /// Number of directed edges; an undirected pair counts twice
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn require_node(&self, data: &N) -> Result<()> {
        if self.nodes.contains_key(data) {
            Ok(())
        } else {
            Err(RouteError::node_not_found(data))
        }
    }
}
