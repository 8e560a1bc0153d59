//! Advent of Code Graph Toolkit
//!
//! Shared search helpers for Advent of Code solutions: a small [`Graph`]
//! trait, grid-backed graphs, a breadth-first traversal engine and a
//! Dijkstra engine able to return every shortest path.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Graph`] trait with a node-to-key projection so searches can hash
//!   composite nodes cheaply
//! - [`Grid`] storage with parsing, and [`GridGraph`] / [`HeadingGraph`]
//!   adapters over it
//! - [`AdjacencyGraph`] for puzzles described as named nodes and tunnels
//! - [`Bfs`] with visit-once and forced-revisit policies
//! - [`dijkstra`], [`dijkstra_any_path`] and [`dijkstra_all_paths`]
//! - [`DistanceMatrix`] for pairwise distances between points of interest
//!
//! # Quick Example
//!
//! ```
//! use aoc_graph::{Grid, GridGraph, bfs, dijkstra_any_path, path_weight};
//!
//! let grid = Grid::parse("S..#\n.#..\n...E").unwrap();
//! let start = grid.find(|&c| c == 'S').unwrap();
//! let end = grid.find(|&c| c == 'E').unwrap();
//! let graph = GridGraph::new(grid).with_filter(|_, &cell| cell != '#');
//!
//! let (distance, path) = dijkstra_any_path(&graph, &start, &end);
//! assert_eq!(distance, 5);
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&end));
//! assert_eq!(path_weight(&graph, &path), distance);
//!
//! // Every open cell is reachable from the start
//! let reached = bfs(&graph, [start], |_, _, _, _| {});
//! assert_eq!(reached.len(), 10);
//! ```
//!
//! # Unreachable Nodes
//!
//! Nothing in the search engines fails. An unreachable destination is
//! reported as [`Weight::INFINITY`] with no paths; callers check for it.

mod adjacency;
mod error;
mod graph;
pub mod grid;
pub mod search;

// Re-export public API
pub use adjacency::AdjacencyGraph;
pub use error::{GraphError, GridError};
pub use graph::{Graph, Weight, path_weight};
pub use grid::{
    ALL_DIRECTIONS, CARDINAL, Coord, Grid, GridGraph, Heading, HeadingGraph, HeadingNode, Offset,
};
pub use search::{
    Bfs, DistanceMatrix, PathMode, PriorityQueue, ShortestPaths, VisitFlow, bfs, dijkstra,
    dijkstra_all_paths, dijkstra_any_path, dijkstra_distances, dijkstra_with,
};
