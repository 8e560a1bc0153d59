//! Pairwise distances between points of interest.

use std::collections::HashMap;
use std::hash::Hash;

use rayon::ThreadPool;
use rayon::prelude::*;

use super::dijkstra::dijkstra_distances;
use crate::graph::{Graph, Weight};

/// Shortest distances between every pair of a chosen set of nodes.
///
/// Puzzles that hop between a handful of interesting locations (valves,
/// keys, doors) can search the full graph once per location and then work
/// on this small dense table instead. One single-source search runs per
/// node, in parallel; the graph is only read.
///
/// # Example
///
/// ```
/// use aoc_graph::{DistanceMatrix, Grid, GridGraph};
///
/// let graph = GridGraph::new(Grid::parse("....\n....").unwrap());
/// let matrix = DistanceMatrix::between(&graph, &[(0, 0), (1, 3)]);
///
/// assert_eq!(matrix.get(&0, &7), Some(4));
/// assert_eq!(matrix.get(&7, &7), Some(0));
/// assert_eq!(matrix.get(&0, &1), None); // (0, 1) is not in the matrix
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix<K, W> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    distances: Vec<W>,
}

impl<K, W> DistanceMatrix<K, W>
where
    K: Copy + Eq + Hash + Send + Sync,
    W: Weight + Send + Sync,
{
    /// Computes the matrix on the global rayon pool.
    pub fn between<G>(graph: &G, nodes: &[G::Node]) -> Self
    where
        G: Graph<Key = K, Weight = W> + Sync,
        G::Node: Sync,
    {
        Self::compute(graph, nodes)
    }

    /// Computes the matrix inside a caller-provided thread pool.
    pub fn between_in<G>(pool: &ThreadPool, graph: &G, nodes: &[G::Node]) -> Self
    where
        G: Graph<Key = K, Weight = W> + Sync,
        G::Node: Sync,
    {
        pool.install(|| Self::compute(graph, nodes))
    }

    fn compute<G>(graph: &G, nodes: &[G::Node]) -> Self
    where
        G: Graph<Key = K, Weight = W> + Sync,
        G::Node: Sync,
    {
        let mut keys: Vec<K> = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());
        let mut sources: Vec<&G::Node> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let key = graph.key_for(node);
            if !index.contains_key(&key) {
                index.insert(key, keys.len());
                keys.push(key);
                sources.push(node);
            }
        }

        let rows: Vec<Vec<W>> = sources
            .par_iter()
            .map(|source| {
                let reached = dijkstra_distances(graph, *source);
                keys.iter()
                    .map(|key| reached.get(key).copied().unwrap_or(W::INFINITY))
                    .collect()
            })
            .collect();

        log::debug!("Distance matrix complete: {} nodes", keys.len());

        Self {
            keys,
            index,
            distances: rows.into_iter().flatten().collect(),
        }
    }

    /// Distance from `from` to `to`.
    ///
    /// Returns `None` if either key is not part of the matrix, and
    /// `Some(W::INFINITY)` if `to` cannot be reached.
    pub fn get(&self, from: &K, to: &K) -> Option<W> {
        let row = *self.index.get(from)?;
        let col = *self.index.get(to)?;
        Some(self.distances[row * self.keys.len() + col])
    }

    /// Keys of the nodes in the matrix, in first-seen order
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
