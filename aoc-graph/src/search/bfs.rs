//! Layered breadth-first traversal.

use std::collections::HashMap;
use std::mem;

use crate::graph::{Graph, Weight};

/// What the traversal should do after a visitor has seen a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitFlow {
    /// Expand the node only the first time it is seen
    #[default]
    Default,
    /// Expand the node even if it was seen before
    Continue,
}

impl From<()> for VisitFlow {
    fn from(_: ()) -> Self {
        VisitFlow::Default
    }
}

impl From<bool> for VisitFlow {
    fn from(force: bool) -> Self {
        if force {
            VisitFlow::Continue
        } else {
            VisitFlow::Default
        }
    }
}

/// Breadth-first traversal builder.
///
/// The traversal runs in rounds: every entry queued at the start of a round
/// is taken out together, so all nodes of one layer are handled before any
/// node of the next. For each dequeued `(node, distance)` the visitor is
/// called with `already_visited`; the node is then expanded (its distance
/// recorded and its neighbours queued at `distance + edge_weight`) if it is
/// new, or if the visitor returned [`VisitFlow::Continue`].
///
/// # Warning: Forced Revisits
///
/// Returning [`VisitFlow::Continue`] for already-visited nodes on a graph
/// with cycles never terminates. Only force revisits on acyclic graphs, or
/// bound the search with [`Bfs::max_distance`].
///
/// # Example
///
/// ```
/// use aoc_graph::{Bfs, Grid, GridGraph};
///
/// let graph = GridGraph::new(Grid::parse("...\n...").unwrap());
/// let mut seen = 0;
/// let distances = Bfs::new(&graph)
///     .starting_node((0, 0))
///     .run(|_, _, _, already_visited| {
///         if !already_visited {
///             seen += 1;
///         }
///     });
///
/// assert_eq!(seen, 6);
/// assert_eq!(distances[&5], 3); // (1, 2)
/// ```
pub struct Bfs<'g, G: Graph> {
    graph: &'g G,
    starting_nodes: Vec<G::Node>,
    max_distance: Option<G::Weight>,
}

impl<'g, G: Graph> Bfs<'g, G> {
    /// Creates a traversal over `graph` with no starting nodes and no cutoff.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            starting_nodes: Vec::new(),
            max_distance: None,
        }
    }

    /// Adds a starting node at distance zero.
    pub fn starting_node(mut self, node: G::Node) -> Self {
        self.starting_nodes.push(node);
        self
    }

    /// Adds several starting nodes at distance zero.
    pub fn starting_nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        self.starting_nodes.extend(nodes);
        self
    }

    /// Stops before processing entries at or beyond `distance`.
    ///
    /// The cutoff is checked per dequeued entry, not per round. On weighted
    /// graphs a round can mix distances; only its entries below the cutoff
    /// reach the visitor.
    pub fn max_distance(mut self, distance: G::Weight) -> Self {
        self.max_distance = Some(distance);
        self
    }

    /// Runs the traversal and returns the distance of every expanded node,
    /// keyed by [`Graph::key_for`].
    pub fn run<F, R>(self, mut visit: F) -> HashMap<G::Key, G::Weight>
    where
        F: FnMut(&G, &G::Node, G::Weight, bool) -> R,
        R: Into<VisitFlow>,
    {
        let graph = self.graph;
        let mut distances: HashMap<G::Key, G::Weight> = HashMap::new();
        let mut queue: Vec<(G::Node, G::Weight)> = self
            .starting_nodes
            .into_iter()
            .map(|node| (node, G::Weight::ZERO))
            .collect();
        let mut rounds = 0usize;

        while !queue.is_empty() {
            rounds += 1;
            let round = mem::take(&mut queue);
            log::trace!("BFS round {}: {} entries", rounds, round.len());

            for (node, distance) in round {
                if self.max_distance.is_some_and(|max| distance >= max) {
                    continue;
                }

                let key = graph.key_for(&node);
                let known = distances.get(&key).copied();
                let flow: VisitFlow = visit(graph, &node, distance, known.is_some()).into();

                if known.is_some() && flow != VisitFlow::Continue {
                    continue;
                }

                distances.insert(key, known.map_or(distance, |d| d.min(distance)));
                for neighbour in graph.neighbours(&node) {
                    let next = distance.plus(graph.edge_weight(&node, &neighbour));
                    if !next.is_infinite() {
                        queue.push((neighbour, next));
                    }
                }
            }
        }

        log::debug!(
            "BFS complete: {} nodes reached in {} rounds",
            distances.len(),
            rounds
        );
        distances
    }
}

/// Shorthand for [`Bfs`] without a distance cutoff.
pub fn bfs<G, I, F, R>(graph: &G, starting_nodes: I, visit: F) -> HashMap<G::Key, G::Weight>
where
    G: Graph,
    I: IntoIterator<Item = G::Node>,
    F: FnMut(&G, &G::Node, G::Weight, bool) -> R,
    R: Into<VisitFlow>,
{
    Bfs::new(graph).starting_nodes(starting_nodes).run(visit)
}
