//! Explicit adjacency-list graph

use crate::error::GraphError;
use crate::graph::{Graph, Weight};

/// A directed graph with weighted edges stored as adjacency lists.
///
/// Nodes are dense `usize` indices handed out by [`AdjacencyGraph::add_node`],
/// each carrying a value of type `V`. Useful for puzzles whose input is a
/// list of named rooms or valves joined by tunnels.
///
/// # Example
///
/// ```
/// use aoc_graph::{AdjacencyGraph, dijkstra};
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// let aa = graph.add_node("AA");
/// let bb = graph.add_node("BB");
/// let cc = graph.add_node("CC");
/// graph.add_undirected_edge(aa, bb, 1).unwrap();
/// graph.add_undirected_edge(bb, cc, 1).unwrap();
///
/// assert_eq!(dijkstra(&graph, &aa, &cc), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W = u64> {
    values: Vec<V>,
    edges: Vec<Vec<(usize, W)>>,
}

impl<V, W: Weight> AdjacencyGraph<V, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node and returns its index.
    pub fn add_node(&mut self, value: V) -> usize {
        self.values.push(value);
        self.edges.push(Vec::new());
        self.values.len() - 1
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// # Returns
    /// * `Err(GraphError::UnknownNode)` - Either endpoint was never added
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), GraphError> {
        self.check_node(to)?;
        self.edges
            .get_mut(from)
            .ok_or(GraphError::UnknownNode(from))?
            .push((to, weight));
        Ok(())
    }

    /// Adds an edge in both directions.
    pub fn add_undirected_edge(
        &mut self,
        a: usize,
        b: usize,
        weight: W,
    ) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no node was added yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.values.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }
}

impl<V, W: Weight> Default for AdjacencyGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W: Weight> Graph for AdjacencyGraph<V, W> {
    type Node = usize;
    type Key = usize;
    type Weight = W;
    type Value<'a>
        = &'a V
    where
        Self: 'a;

    fn value_at(&self, node: &usize) -> &V {
        &self.values[*node]
    }

    fn key_for(&self, node: &usize) -> usize {
        *node
    }

    fn node_for(&self, key: usize) -> usize {
        key
    }

    fn edge_weight(&self, from: &usize, to: &usize) -> W {
        self.edges
            .get(*from)
            .into_iter()
            .flatten()
            .filter(|(target, _)| target == to)
            .map(|&(_, weight)| weight)
            .min()
            .unwrap_or(W::INFINITY)
    }

    fn neighbours(&self, node: &usize) -> Vec<usize> {
        let mut targets: Vec<usize> = Vec::new();
        for &(target, _) in self.edges.get(*node).into_iter().flatten() {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        targets
    }
}
