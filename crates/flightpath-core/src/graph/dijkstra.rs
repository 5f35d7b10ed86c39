use crate::error::{Result, RouteError};
use crate::graph::store::Graph;
use crate::graph::types::{Node, PathResult, Weight};
use crate::map::KeyValueMap;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// One candidate path discovered during a search: the node it ends at, its
/// cumulative cost, and the arena index of the entry it was reached from.
#[derive(Debug, Clone)]
pub struct SearchNode<'g, N> {
    pub node: &'g N,
    pub cost: f64,
    pub predecessor: Option<usize>,
}

/// Frontier entry; ordered by cost, then by discovery order
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub cost: f64,
    pub index: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Arena of search nodes produced by one search, plus the entry that
/// reached the destination.
///
/// Every predecessor index is smaller than the index of the entry holding
/// it, so walking predecessors always terminates at the root (index 0).
#[derive(Debug)]
pub struct SearchTree<'g, N> {
    arena: Vec<SearchNode<'g, N>>,
    terminal: usize,
}

impl<'g, N: Clone> SearchTree<'g, N> {
    pub fn terminal(&self) -> &SearchNode<'g, N> {
        &self.arena[self.terminal]
    }

    /// Total cost of the path to the destination
    pub fn cost(&self) -> f64 {
        self.terminal().cost
    }

    /// Node identifiers from start to destination
    pub fn path(&self) -> Vec<N> {
        let mut path = Vec::new();
        let mut cursor = Some(self.terminal);
        while let Some(index) = cursor {
            let entry = &self.arena[index];
            path.push(entry.node.clone());
            cursor = entry.predecessor;
        }
        path.reverse();
        path
    }

    /// Number of search nodes created while searching
    pub fn discovered(&self) -> usize {
        self.arena.len()
    }
}

/// Lazy-deletion Dijkstra from `start` to `end`.
///
/// Fails with `NodeNotFound` before searching if either endpoint is missing,
/// and with `PathNotFound` when the frontier drains without reaching `end`.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, end = ?end))]
pub fn compute_shortest_path<'g, N, W, M>(
    graph: &'g Graph<N, W, M>,
    start: &'g N,
    end: &N,
) -> Result<SearchTree<'g, N>>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    M: KeyValueMap<N, Node<N, W>>,
{
    let timer = Instant::now();

    if !graph.contains_node(start) {
        return Err(RouteError::node_not_found(start));
    }
    if !graph.contains_node(end) {
        return Err(RouteError::node_not_found(end));
    }

    let mut arena = vec![SearchNode {
        node: start,
        cost: 0.0,
        predecessor: None,
    }];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(HeapEntry {
        cost: 0.0,
        index: 0,
    }));
    let mut visited: HashMap<&'g N, bool> = HashMap::new();

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = arena[entry.index].node;

        // Stale entry: a cheaper path to this node was already finalized
        if visited.contains_key(&current) {
            continue;
        }
        visited.put(current, true);

        if current == end {
            crate::trace_time!(
                timer,
                "dijkstra",
                visited = visited.size(),
                discovered = arena.len()
            );
            return Ok(SearchTree {
                arena,
                terminal: entry.index,
            });
        }

        for edge in graph.edges_from(current)? {
            if visited.contains_key(&&edge.successor) {
                continue;
            }
            let cost = entry.cost + edge.weight.to_f64();
            arena.push(SearchNode {
                node: &edge.successor,
                cost,
                predecessor: Some(entry.index),
            });
            frontier.push(Reverse(HeapEntry {
                cost,
                index: arena.len() - 1,
            }));
        }
    }

    tracing::debug!(
        visited = visited.size(),
        discovered = arena.len(),
        "frontier exhausted"
    );
    Err(RouteError::path_not_found(start, end))
}

impl<N, W, M> Graph<N, W, M>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    M: KeyValueMap<N, Node<N, W>>,
{
    /// Node identifiers along the cheapest path from `start` to `end`, both
    /// inclusive
    pub fn shortest_path_data(&self, start: &N, end: &N) -> Result<Vec<N>> {
        Ok(compute_shortest_path(self, start, end)?.path())
    }

    /// Sum of edge weights along the cheapest path; `0.0` when `start == end`
    pub fn shortest_path_cost(&self, start: &N, end: &N) -> Result<f64> {
        Ok(compute_shortest_path(self, start, end)?.cost())
    }

    /// Path and cost from a single search
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<PathResult<N>> {
        let tree = compute_shortest_path(self, start, end)?;
        Ok(PathResult {
            nodes: tree.path(),
            cost: tree.cost(),
        })
    }
}
