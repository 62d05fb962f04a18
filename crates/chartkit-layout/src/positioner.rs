//! Turn a final layout result into concrete cell boxes.

use chartkit_core::{Point, Rect};
use serde::Serialize;

use crate::cells::Cells;
use crate::config::GridConfig;
use crate::solver::LayoutResult;

/// Positions and sizes of every track after a final layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridPlacement {
    /// Row heights.
    row_heights: Vec<u32>,
    /// Column widths.
    col_widths: Vec<u32>,
    /// Row Y positions (cumulative with padding).
    row_positions: Vec<u32>,
    /// Column X positions (cumulative with padding).
    col_positions: Vec<u32>,
}

impl GridPlacement {
    /// Lay tracks out from `origin`, separated by the configured padding.
    #[must_use]
    pub fn new(result: &LayoutResult, config: &GridConfig, origin: Point) -> Self {
        let row_heights = result.row_heights();
        let col_widths = result.column_widths();
        let row_positions = calculate_positions(&row_heights, origin.y, config.row_padding);
        let col_positions = calculate_positions(&col_widths, origin.x, config.column_padding);
        Self {
            row_heights,
            col_widths,
            row_positions,
            col_positions,
        }
    }

    /// Hand every occupied cell its box. Empty cells keep their space.
    pub fn place(&self, cells: &Cells) {
        for (row, col, rect) in self.iter_cells() {
            if let Some(component) = cells.get(row, col) {
                component.compute_layout(rect);
            }
        }
    }

    /// Get the rectangle for a specific cell.
    ///
    /// Returns an empty Rect if coordinates are out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Rect {
        if row >= self.row_heights.len() || col >= self.col_widths.len() {
            return Rect::default();
        }
        Rect::new(
            self.col_positions[col],
            self.row_positions[row],
            self.col_widths[col],
            self.row_heights[row],
        )
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.row_heights.len()
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.col_widths.len()
    }

    /// Iterate over all cells, yielding (row, col, Rect).
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let num_rows = self.num_rows();
        let num_cols = self.num_cols();
        (0..num_rows)
            .flat_map(move |row| (0..num_cols).map(move |col| (row, col, self.cell(row, col))))
    }
}

/// Cumulative positions from sizes, with `gap` between consecutive tracks.
fn calculate_positions(sizes: &[u32], start: u32, gap: u32) -> Vec<u32> {
    let mut positions = Vec::with_capacity(sizes.len());
    let mut pos = start;

    for (i, &size) in sizes.iter().enumerate() {
        positions.push(pos);
        pos = pos.saturating_add(size);
        if i + 1 < sizes.len() {
            pos = pos.saturating_add(gap);
        }
    }

    positions
}
