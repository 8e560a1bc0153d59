//! Core graph trait and edge weights

use std::fmt::Debug;
use std::hash::Hash;

/// Distance type used by the search engines.
///
/// Weights are totally ordered and non-negative. [`Weight::INFINITY`] is the
/// "unreachable" sentinel and is absorbing under [`Weight::plus`], so
/// `INFINITY.plus(w) == INFINITY` for every finite `w`.
pub trait Weight: Copy + Ord + Debug {
    /// Distance from a node to itself
    const ZERO: Self;
    /// Sentinel for "no edge" and "not reached"
    const INFINITY: Self;

    /// Adds two weights, saturating at [`Weight::INFINITY`]
    fn plus(self, other: Self) -> Self;

    /// Returns `true` if this weight is the unreachable sentinel
    fn is_infinite(self) -> bool {
        self == Self::INFINITY
    }
}

macro_rules! impl_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;
                const INFINITY: Self = <$ty>::MAX;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, u128, usize, i32, i64);

/// A search space that the traversal engines can walk.
///
/// Implementors pick their own node representation and an injective
/// projection of nodes to small hashable keys. The engines only ever store
/// keys, and turn them back into nodes with [`Graph::node_for`] when a path
/// has to be rebuilt.
///
/// # Contract
///
/// - `node_for(key_for(n)) == n` for every valid node `n`
/// - `neighbours(n)` only returns nodes one legal move away from `n`
/// - `edge_weight(a, b)` is finite and non-negative for every `b` in
///   `neighbours(a)`, and [`Weight::INFINITY`] when there is no such move
///
/// None of this is checked at runtime.
///
/// # Example
///
/// ```
/// use aoc_graph::{Graph, Weight};
///
/// /// Numbers on a line, each connected to its successor
/// struct Line(u32);
///
/// impl Graph for Line {
///     type Node = u32;
///     type Key = u32;
///     type Weight = u32;
///     type Value<'a> = u32;
///
///     fn value_at(&self, node: &u32) -> u32 {
///         *node
///     }
///     fn key_for(&self, node: &u32) -> u32 {
///         *node
///     }
///     fn node_for(&self, key: u32) -> u32 {
///         key
///     }
///     fn edge_weight(&self, from: &u32, to: &u32) -> u32 {
///         if *to == from + 1 && *to < self.0 { 1 } else { u32::INFINITY }
///     }
///     fn neighbours(&self, node: &u32) -> Vec<u32> {
///         if node + 1 < self.0 { vec![node + 1] } else { vec![] }
///     }
/// }
///
/// assert_eq!(aoc_graph::dijkstra(&Line(10), &2, &7), 5);
/// ```
pub trait Graph {
    /// Position in the search space
    type Node: Clone + PartialEq;
    /// Hashable projection of a node
    type Key: Copy + Eq + Hash;
    /// Edge cost
    type Weight: Weight;
    /// Payload stored at a node
    type Value<'a>
    where
        Self: 'a;

    /// Returns the payload stored at `node`.
    fn value_at(&self, node: &Self::Node) -> Self::Value<'_>;

    /// Projects `node` to its key.
    fn key_for(&self, node: &Self::Node) -> Self::Key;

    /// Inverse of [`Graph::key_for`] for keys it produced.
    fn node_for(&self, key: Self::Key) -> Self::Node;

    /// Cost of moving from `from` to `to`, or [`Weight::INFINITY`] if that is
    /// not a single legal move.
    fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Self::Weight;

    /// All nodes reachable from `node` in one legal move.
    fn neighbours(&self, node: &Self::Node) -> Vec<Self::Node>;
}

/// Sums the edge weights along `path`.
///
/// A single node (or an empty path) costs [`Weight::ZERO`]. A path with a
/// step that is not an edge costs [`Weight::INFINITY`].
pub fn path_weight<G: Graph>(graph: &G, path: &[G::Node]) -> G::Weight {
    path.windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]))
        .fold(G::Weight::ZERO, Weight::plus)
}
