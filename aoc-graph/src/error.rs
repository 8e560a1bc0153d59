//! Error types for graph and grid construction

use thiserror::Error;

/// Error type for building a [`Grid`](crate::grid::Grid)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input has no rows (or only empty rows)
    #[error("Grid must contain at least one non-empty row")]
    Empty,
    /// A row's length differs from the first row
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character could not be mapped to a cell value
    #[error("Invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Error type for building an [`AdjacencyGraph`](crate::AdjacencyGraph)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint refers to a node that was never added
    #[error("Node {0} does not exist")]
    UnknownNode(usize),
}
