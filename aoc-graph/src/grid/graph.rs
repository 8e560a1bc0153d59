//! Grid adapter implementing [`Graph`]

use super::{CARDINAL, Coord, Grid, Offset};
use crate::graph::{Graph, Weight};

/// Cell predicate accepting every in-bounds cell
fn any_cell<T>(_: Coord, _: &T) -> bool {
    true
}

/// Exposes a [`Grid`] as a [`Graph`] over `(row, col)` nodes.
///
/// Neighbours come from an offset table (cardinal by default) and are kept
/// only when [`GridGraph::valid_coord`] accepts them: inside the grid and
/// accepted by the cell predicate installed with [`GridGraph::with_filter`].
///
/// # Example
///
/// ```
/// use aoc_graph::{Grid, GridGraph, dijkstra};
///
/// let grid = Grid::parse("S.#\n#..\n..E").unwrap();
/// let graph = GridGraph::new(grid).with_filter(|_, &cell| cell != '#');
///
/// assert_eq!(dijkstra(&graph, &(0, 0), &(2, 2)), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GridGraph<T, F = fn(Coord, &T) -> bool> {
    grid: Grid<T>,
    offsets: Vec<Offset>,
    passable: F,
}

impl<T> GridGraph<T> {
    /// Wraps `grid` with cardinal moves and every cell passable.
    pub fn new(grid: Grid<T>) -> Self {
        Self {
            grid,
            offsets: CARDINAL.to_vec(),
            passable: any_cell::<T>,
        }
    }
}

impl<T, F> GridGraph<T, F>
where
    F: Fn(Coord, &T) -> bool,
{
    /// Replaces the neighbour offsets, e.g. with
    /// [`ALL_DIRECTIONS`](super::ALL_DIRECTIONS).
    pub fn with_offsets(mut self, offsets: &[Offset]) -> Self {
        self.offsets = offsets.to_vec();
        self
    }

    /// Replaces the cell predicate deciding which in-bounds cells can be
    /// entered.
    pub fn with_filter<P>(self, passable: P) -> GridGraph<T, P>
    where
        P: Fn(Coord, &T) -> bool,
    {
        GridGraph {
            grid: self.grid,
            offsets: self.offsets,
            passable,
        }
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Returns `true` if `coord` is inside the grid and passable.
    pub fn valid_coord(&self, coord: Coord) -> bool {
        self.grid
            .get(coord)
            .is_some_and(|cell| (self.passable)(coord, cell))
    }

    /// Overwrites a cell in place, returning the previous value.
    ///
    /// Only call this between searches.
    pub fn set(&mut self, coord: Coord, value: T) -> Option<T> {
        self.grid.set(coord, value)
    }
}

impl<T, F> Graph for GridGraph<T, F>
where
    F: Fn(Coord, &T) -> bool,
{
    type Node = Coord;
    type Key = usize;
    type Weight = usize;
    type Value<'a>
        = &'a T
    where
        Self: 'a;

    fn value_at(&self, node: &Coord) -> &T {
        &self.grid[*node]
    }

    fn key_for(&self, &(row, col): &Coord) -> usize {
        row * self.grid.width() + col
    }

    fn node_for(&self, key: usize) -> Coord {
        (key / self.grid.width(), key % self.grid.width())
    }

    /// 1 when `to` is one offset-table step away from `from` and both cells
    /// are valid. With [`CARDINAL`] this is a Manhattan distance of exactly 1.
    fn edge_weight(&self, from: &Coord, to: &Coord) -> usize {
        let adjacent = self
            .offsets
            .iter()
            .any(|&offset| self.grid.offset(*from, offset) == Some(*to));
        if adjacent && self.valid_coord(*from) && self.valid_coord(*to) {
            1
        } else {
            usize::INFINITY
        }
    }

    fn neighbours(&self, node: &Coord) -> Vec<Coord> {
        self.offsets
            .iter()
            .filter_map(|&offset| self.grid.offset(*node, offset))
            .filter(|&coord| self.valid_coord(coord))
            .collect()
    }
}
