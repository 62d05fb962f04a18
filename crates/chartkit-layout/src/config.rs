//! Grid spacing and track weight configuration.
//!
//! `GridConfig` is plain data: it can be built fluently, deserialized from
//! JSON (missing fields take their defaults), and applied to a live grid.
//! Changes take effect on the next layout pass.

use serde::{Deserialize, Serialize};

use crate::grid::MAX_EXTENT;

/// Padding between tracks and optional explicit track weights.
///
/// A track without an explicit weight is weighted 0 when every element in it
/// is fixed on that axis and 1 otherwise. Weighted tracks share the free
/// space in proportion to their weights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pixels between adjacent rows.
    pub row_padding: u32,
    /// Pixels between adjacent columns.
    pub column_padding: u32,
    /// Explicit weights by row index; `None` derives the weight.
    pub row_weights: Vec<Option<u32>>,
    /// Explicit weights by column index; `None` derives the weight.
    pub column_weights: Vec<Option<u32>>,
}

impl GridConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding between rows.
    #[must_use]
    pub fn row_padding(mut self, pixels: u32) -> Self {
        self.row_padding = pixels;
        self
    }

    /// Set the padding between columns.
    #[must_use]
    pub fn column_padding(mut self, pixels: u32) -> Self {
        self.column_padding = pixels;
        self
    }

    /// Set uniform padding for both rows and columns.
    #[must_use]
    pub fn padding(self, pixels: u32) -> Self {
        self.row_padding(pixels).column_padding(pixels)
    }

    /// Set an explicit weight for one row.
    #[must_use]
    pub fn row_weight(mut self, row: usize, weight: u32) -> Self {
        self.set_row_weight(row, Some(weight));
        self
    }

    /// Set an explicit weight for one column.
    #[must_use]
    pub fn column_weight(mut self, col: usize, weight: u32) -> Self {
        self.set_column_weight(col, Some(weight));
        self
    }

    /// Set or clear the explicit weight of a row.
    ///
    /// Indices at or beyond [`MAX_EXTENT`] name no possible track and are
    /// ignored.
    pub fn set_row_weight(&mut self, row: usize, weight: Option<u32>) {
        set_weight(&mut self.row_weights, row, weight);
    }

    /// Set or clear the explicit weight of a column; see
    /// [`set_row_weight`](Self::set_row_weight).
    pub fn set_column_weight(&mut self, col: usize, weight: Option<u32>) {
        set_weight(&mut self.column_weights, col, weight);
    }

    /// Explicit weight of `row`, if any.
    #[inline]
    #[must_use]
    pub fn weight_of_row(&self, row: usize) -> Option<u32> {
        self.row_weights.get(row).copied().flatten()
    }

    /// Explicit weight of `col`, if any.
    #[inline]
    #[must_use]
    pub fn weight_of_column(&self, col: usize) -> Option<u32> {
        self.column_weights.get(col).copied().flatten()
    }

    /// Total padding between `rows` rows.
    #[inline]
    #[must_use]
    pub fn total_row_padding(&self, rows: usize) -> u32 {
        total_padding(self.row_padding, rows)
    }

    /// Total padding between `cols` columns.
    #[inline]
    #[must_use]
    pub fn total_column_padding(&self, cols: usize) -> u32 {
        total_padding(self.column_padding, cols)
    }
}

fn set_weight(weights: &mut Vec<Option<u32>>, index: usize, weight: Option<u32>) {
    if index >= MAX_EXTENT {
        tracing::warn!(index, max = MAX_EXTENT, "ignoring weight for out-of-range track");
        return;
    }
    if index >= weights.len() {
        if weight.is_none() {
            return;
        }
        weights.resize(index + 1, None);
    }
    weights[index] = weight;
}

fn total_padding(padding: u32, count: usize) -> u32 {
    if count > 1 {
        let gaps = (count - 1) as u64;
        (gaps * u64::from(padding)).min(u64::from(u32::MAX)) as u32
    } else {
        0
    }
}
