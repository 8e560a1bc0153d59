//! Search engines over any [`Graph`](crate::Graph)
//!
//! - [`Bfs`] / [`bfs`]: layered breadth-first traversal with a visitor and a
//!   per-node revisit policy
//! - [`dijkstra`], [`dijkstra_any_path`], [`dijkstra_all_paths`]: single-pair
//!   shortest paths, optionally rebuilding one or every shortest path
//! - [`dijkstra_distances`]: single-source distances to every node
//! - [`DistanceMatrix`]: pairwise distances between chosen nodes, in parallel
//!
//! Every call owns its own distance and predecessor maps, so a graph can be
//! mutated between calls without stale results leaking across.

mod bfs;
mod dijkstra;
mod matrix;
mod queue;

pub use bfs::{Bfs, VisitFlow, bfs};
pub use dijkstra::{
    PathMode, ShortestPaths, dijkstra, dijkstra_all_paths, dijkstra_any_path,
    dijkstra_distances, dijkstra_with,
};
pub use matrix::DistanceMatrix;
pub use queue::PriorityQueue;
