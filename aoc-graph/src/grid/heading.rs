//! Direction-sensitive grid graph

use super::{Coord, GridGraph, Offset};
use crate::graph::{Graph, Weight};

/// Facing direction on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, clockwise from north
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Step taken when moving forward
    pub fn offset(self) -> Offset {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub fn turn_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    pub fn turn_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub fn reverse(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Position in [`Heading::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// `(row, col, heading)`
pub type HeadingNode = (usize, usize, Heading);

/// A grid where every node also carries the direction it faces.
///
/// From `(row, col, heading)` one can step forward into the next valid cell
/// for `step_cost`, or rotate 90 degrees in place for `turn_cost`. Cell
/// validity is delegated to the wrapped [`GridGraph`].
///
/// Keys pack the cell index and the heading into one `usize`:
/// `(row * width + col) << 2 | heading`.
///
/// # Example
///
/// ```
/// use aoc_graph::{Grid, GridGraph, Heading, HeadingGraph, dijkstra};
///
/// let grid = Grid::parse("...\n##.\n...").unwrap();
/// let base = GridGraph::new(grid).with_filter(|_, &cell| cell != '#');
/// let graph = HeadingGraph::new(base, 1, 1000);
///
/// // Two steps east, turn south, two steps
/// let cost = dijkstra(&graph, &(0, 0, Heading::East), &(2, 2, Heading::South));
/// assert_eq!(cost, 1004);
/// ```
#[derive(Debug, Clone)]
pub struct HeadingGraph<T, F = fn(Coord, &T) -> bool> {
    base: GridGraph<T, F>,
    step_cost: usize,
    turn_cost: usize,
}

impl<T, F> HeadingGraph<T, F>
where
    F: Fn(Coord, &T) -> bool,
{
    pub fn new(base: GridGraph<T, F>, step_cost: usize, turn_cost: usize) -> Self {
        Self {
            base,
            step_cost,
            turn_cost,
        }
    }

    pub fn base(&self) -> &GridGraph<T, F> {
        &self.base
    }

    /// Overwrites a cell of the underlying grid. Only call this between
    /// searches.
    pub fn set(&mut self, coord: Coord, value: T) -> Option<T> {
        self.base.set(coord, value)
    }

    /// Every heading node located at `coord`
    pub fn at(&self, (row, col): Coord) -> [HeadingNode; 4] {
        Heading::ALL.map(|heading| (row, col, heading))
    }

    fn forward(&self, (row, col, heading): HeadingNode) -> Option<Coord> {
        self.base
            .grid()
            .offset((row, col), heading.offset())
            .filter(|&next| self.base.valid_coord(next))
    }
}

impl<T, F> Graph for HeadingGraph<T, F>
where
    F: Fn(Coord, &T) -> bool,
{
    type Node = HeadingNode;
    type Key = usize;
    type Weight = usize;
    type Value<'a>
        = &'a T
    where
        Self: 'a;

    fn value_at(&self, &(row, col, _): &HeadingNode) -> &T {
        self.base.value_at(&(row, col))
    }

    fn key_for(&self, &(row, col, heading): &HeadingNode) -> usize {
        (self.base.key_for(&(row, col)) << 2) | heading.index()
    }

    fn node_for(&self, key: usize) -> HeadingNode {
        let (row, col) = self.base.node_for(key >> 2);
        (row, col, Heading::ALL[key & 0b11])
    }

    fn edge_weight(&self, from: &HeadingNode, to: &HeadingNode) -> usize {
        let (row, col, heading) = *from;
        if !self.base.valid_coord((row, col)) {
            return usize::INFINITY;
        }

        if (to.0, to.1) == (row, col)
            && (to.2 == heading.turn_left() || to.2 == heading.turn_right())
        {
            self.turn_cost
        } else if to.2 == heading && self.forward(*from) == Some((to.0, to.1)) {
            self.step_cost
        } else {
            usize::INFINITY
        }
    }

    fn neighbours(&self, node: &HeadingNode) -> Vec<HeadingNode> {
        let (row, col, heading) = *node;
        let mut next = Vec::with_capacity(3);
        if let Some((r, c)) = self.forward(*node) {
            next.push((r, c, heading));
        }
        next.push((row, col, heading.turn_right()));
        next.push((row, col, heading.turn_left()));
        next
    }
}
