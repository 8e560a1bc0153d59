//! Dijkstra shortest paths with optional path reconstruction.

use std::collections::{HashMap, VecDeque};

use super::queue::PriorityQueue;
use crate::graph::{Graph, Weight, path_weight};

/// Which shortest paths to rebuild after the distances are known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// One shortest path (the first one discovered)
    Any,
    /// Every path tied for the minimum cost
    All,
}

/// Result of [`dijkstra_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<N, W> {
    /// Cost of the cheapest path, or [`Weight::INFINITY`] if unreachable
    pub distance: W,
    /// Reconstructed paths from source to destination, both included.
    /// Empty when no [`PathMode`] was requested or the destination is
    /// unreachable.
    pub paths: Vec<Vec<N>>,
}

/// State of one shortest-path search. Owned by a single call and dropped
/// afterwards.
struct Search<'g, G: Graph> {
    graph: &'g G,
    mode: Option<PathMode>,
    distances: HashMap<G::Key, G::Weight>,
    predecessors: HashMap<G::Key, Vec<G::Key>>,
}

impl<'g, G: Graph> Search<'g, G> {
    fn new(graph: &'g G, mode: Option<PathMode>) -> Self {
        Self {
            graph,
            mode,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Settles every node reachable from `source`. The destination, if any,
    /// is never expanded, but the queue is still drained so that every
    /// equal-cost predecessor of it gets recorded.
    fn run(&mut self, source: &G::Node, destination: Option<&G::Node>) {
        let graph = self.graph;
        let destination = destination.map(|node| graph.key_for(node));
        let mut queue = PriorityQueue::new();
        let mut settled = 0usize;

        self.distances.insert(graph.key_for(source), G::Weight::ZERO);
        queue.push(source.clone(), G::Weight::ZERO);

        while let Some((node, distance)) = queue.pop() {
            let key = graph.key_for(&node);
            if self.best(key) < distance {
                // Stale entry, a shorter one was already handled
                continue;
            }
            if Some(key) == destination {
                continue;
            }
            settled += 1;

            for neighbour in graph.neighbours(&node) {
                let next = distance.plus(graph.edge_weight(&node, &neighbour));
                if next.is_infinite() {
                    continue;
                }

                let neighbour_key = graph.key_for(&neighbour);
                let best = self.best(neighbour_key);
                if next > best {
                    continue;
                }

                match self.mode {
                    Some(PathMode::All) => self
                        .predecessors
                        .entry(neighbour_key)
                        .or_default()
                        .push(key),
                    Some(PathMode::Any) if next < best => {
                        self.predecessors.insert(neighbour_key, vec![key]);
                    }
                    _ => {}
                }

                if next < best {
                    self.distances.insert(neighbour_key, next);
                    queue.push(neighbour, next);
                }
            }
        }

        log::debug!(
            "Dijkstra complete: {} nodes settled, {} reached",
            settled,
            self.distances.len()
        );
    }

    fn best(&self, key: G::Key) -> G::Weight {
        self.distances.get(&key).copied().unwrap_or(G::Weight::INFINITY)
    }

    /// Walks the predecessor lists back from `destination`, fanning out at
    /// every node with several predecessors, then keeps only the candidates
    /// whose real cost equals `distance`. Predecessors admitted with `<=`
    /// may have been beaten later, hence the final filter.
    fn paths(
        &self,
        source: &G::Node,
        destination: &G::Node,
        distance: G::Weight,
    ) -> Vec<Vec<G::Node>> {
        if distance.is_infinite() {
            return Vec::new();
        }

        let graph = self.graph;
        let source = graph.key_for(source);
        let mut complete: Vec<Vec<G::Key>> = Vec::new();
        let mut partials: VecDeque<Vec<G::Key>> =
            VecDeque::from([vec![graph.key_for(destination)]]);

        while let Some(partial) = partials.pop_front() {
            let Some(&head) = partial.last() else {
                continue;
            };
            if head == source {
                complete.push(partial);
                continue;
            }

            for &predecessor in self.predecessors.get(&head).into_iter().flatten() {
                // Zero-weight edges can make predecessor lists cyclic
                if partial.contains(&predecessor) {
                    continue;
                }
                let mut extended = partial.clone();
                extended.push(predecessor);
                partials.push_back(extended);
            }
        }

        complete
            .into_iter()
            .map(|keys| {
                keys.into_iter()
                    .rev()
                    .map(|key| graph.node_for(key))
                    .collect::<Vec<_>>()
            })
            .filter(|path| path_weight(graph, path) == distance)
            .collect()
    }
}

/// Runs Dijkstra from `source` to `destination`, rebuilding paths according
/// to `mode`.
///
/// An unreachable destination gives [`Weight::INFINITY`] and no paths. When
/// `source == destination` the distance is zero and the only path is
/// `[source]`.
pub fn dijkstra_with<G: Graph>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
    mode: Option<PathMode>,
) -> ShortestPaths<G::Node, G::Weight> {
    let mut search = Search::new(graph, mode);
    search.run(source, Some(destination));

    let distance = search.best(graph.key_for(destination));
    let paths = match mode {
        None => Vec::new(),
        Some(PathMode::Any) => search
            .paths(source, destination, distance)
            .into_iter()
            .take(1)
            .collect(),
        Some(PathMode::All) => search.paths(source, destination, distance),
    };

    ShortestPaths { distance, paths }
}

/// Shortest distance from `source` to `destination`.
///
/// # Example
///
/// ```
/// use aoc_graph::{Grid, GridGraph, dijkstra};
///
/// let graph = GridGraph::new(Grid::parse(".....\n.....\n.....\n.....\n.....").unwrap());
/// assert_eq!(dijkstra(&graph, &(0, 0), &(4, 4)), 8);
/// ```
pub fn dijkstra<G: Graph>(graph: &G, source: &G::Node, destination: &G::Node) -> G::Weight {
    dijkstra_with(graph, source, destination, None).distance
}

/// Shortest distance and one path achieving it.
///
/// The path is empty when the destination is unreachable.
pub fn dijkstra_any_path<G: Graph>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
) -> (G::Weight, Vec<G::Node>) {
    let result = dijkstra_with(graph, source, destination, Some(PathMode::Any));
    (
        result.distance,
        result.paths.into_iter().next().unwrap_or_default(),
    )
}

/// Shortest distance and every path achieving it.
///
/// # Example
///
/// ```
/// use aoc_graph::{Grid, GridGraph, dijkstra_all_paths};
///
/// let grid = Grid::parse("...\n.#.\n...").unwrap();
/// let graph = GridGraph::new(grid).with_filter(|_, &cell| cell != '#');
///
/// let (distance, paths) = dijkstra_all_paths(&graph, &(0, 0), &(2, 2));
/// assert_eq!(distance, 4);
/// assert_eq!(paths.len(), 2);
/// ```
pub fn dijkstra_all_paths<G: Graph>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
) -> (G::Weight, Vec<Vec<G::Node>>) {
    let result = dijkstra_with(graph, source, destination, Some(PathMode::All));
    (result.distance, result.paths)
}

/// Shortest distance from `source` to every reachable node, keyed by
/// [`Graph::key_for`].
pub fn dijkstra_distances<G: Graph>(graph: &G, source: &G::Node) -> HashMap<G::Key, G::Weight> {
    let mut search = Search::new(graph, None);
    search.run(source, None);
    search.distances
}
