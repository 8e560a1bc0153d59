//! Rectangular grids and the graphs built on top of them
//!
//! [`Grid`] is plain row-major storage with parsing helpers. [`GridGraph`]
//! exposes a grid through the [`Graph`](crate::Graph) trait, and
//! [`HeadingGraph`] adds a facing direction to every node for puzzles where
//! turning has a cost.

mod graph;
mod heading;

pub use graph::GridGraph;
pub use heading::{Heading, HeadingGraph, HeadingNode};

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// A `(row, col)` position
pub type Coord = (usize, usize);

/// A `(row, col)` step
pub type Offset = (isize, isize);

/// North, east, south, west
pub const CARDINAL: [Offset; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// All eight neighbours, clockwise from north
pub const ALL_DIRECTIONS: [Offset; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Rectangular, row-major grid of cells.
///
/// # Example
///
/// ```
/// use aoc_graph::Grid;
///
/// let grid = Grid::parse("#.#\n...\n").unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid[(1, 2)], '.');
/// assert_eq!(grid.find(|&c| c == '#'), Some((0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Builds a grid from rows of equal length.
    ///
    /// # Returns
    /// * `Err(GridError::Empty)` - No rows, or the first row is empty
    /// * `Err(GridError::Ragged)` - A row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parses one row per line, mapping every character with `cell`.
    ///
    /// Blank lines at the end of the input are ignored.
    ///
    /// # Returns
    /// * `Err(GridError::InvalidCell)` - `cell` returned `None`
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| cell(ch).ok_or(GridError::InvalidCell { row, col, ch }))
                    .collect::<Result<Vec<T>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `coord` lies inside the grid
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.cells[self.index_of(coord)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        if self.contains(coord) {
            let index = self.index_of(coord);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Replaces the cell at `coord`, returning the previous value.
    ///
    /// Returns `None` and leaves the grid untouched if `coord` is outside.
    pub fn set(&mut self, coord: Coord, value: T) -> Option<T> {
        self.get_mut(coord).map(|cell| std::mem::replace(cell, value))
    }

    /// Steps from `coord` by `offset`, staying inside the grid.
    pub fn offset(&self, (row, col): Coord, (dr, dc): Offset) -> Option<Coord> {
        let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
        self.contains(next).then_some(next)
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / width, index % width), cell))
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// First coordinate (in row order) whose cell matches `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<Coord>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|(_, cell)| pred(*cell))
            .map(|(coord, _)| coord)
    }

    /// Every coordinate whose cell matches `pred`.
    pub fn positions<P>(&self, mut pred: P) -> Vec<Coord>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, cell)| pred(*cell))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Builds a grid of the same shape by mapping every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    fn index_of(&self, (row, col): Coord) -> usize {
        row * self.width + col
    }
}

impl Grid<char> {
    /// Parses one row of characters per line.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        assert!(self.contains(coord), "coordinate {coord:?} is outside the grid");
        &self.cells[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        assert!(self.contains(coord), "coordinate {coord:?} is outside the grid");
        let index = self.index_of(coord);
        &mut self.cells[index]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
