//! Errors raised by grid mutation.
//!
//! Every error except `Reattached` is returned before the grid is touched: a
//! failed call leaves cells, extent and memberships exactly as they were.
//! Removal and detach-driven cleanup never fail, and the solver has no error
//! path.

use crate::grid::{MAX_CELLS, MAX_EXTENT};

/// Rejection reasons for [`Grid::add`](crate::Grid::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row or column index lies beyond the addressable extent.
    #[error(
        "cell ({row}, {col}) is outside the addressable grid (indices must be below {max}, at most {cells} cells)",
        max = MAX_EXTENT,
        cells = MAX_CELLS
    )]
    InvalidIndex { row: usize, col: usize },
    /// The target cell already holds a component.
    #[error("cell ({row}, {col}) is occupied")]
    OccupiedCell { row: usize, col: usize },
    /// No component was supplied.
    #[error("cannot add an empty slot to cell ({row}, {col})")]
    NullElement { row: usize, col: usize },
    /// A detach observer moved the component into another container before
    /// it could be placed.
    #[error("component was claimed by another container while moving to cell ({row}, {col})")]
    Reattached { row: usize, col: usize },
}

/// Result alias for grid operations.
pub type Result<T, E = GridError> = std::result::Result<T, E>;
