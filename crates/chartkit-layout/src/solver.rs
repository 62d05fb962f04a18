#![forbid(unsafe_code)]

//! Iterative table layout solver.
//!
//! Given an offer (width, height, final or speculative), the solver decides
//! how many pixels each column and row receives. Every track gets a
//! *guaranteed* size (the largest minimum any of its elements asks for) plus
//! a *proportional* share of whatever space is left.
//!
//! # Algorithm
//!
//! 1. Probe every element with [`UNBOUNDED`] space; each track's guarantee
//!    starts at the largest minimum in it.
//! 2. Split the free space (offer minus padding minus guarantees) between
//!    weighted tracks. Leftover pixels from integer division go one each to
//!    the first weighted tracks in ascending index order.
//! 3. Re-measure every element with its track allocation. A minimum that
//!    exceeds the allocation raises that track's guarantee.
//! 4. Repeat from 2 while guarantees change, at most `rows + cols` passes.
//!    A final offer measures once; iteration also stops as soon as the
//!    guarantees on either axis overflow the available space.
//! 5. Guarantees that do not fit are shrunk max-min fairly. A final offer
//!    reports the shrunk guarantees; a speculative one reports the raw
//!    guarantees so the parent can see what would be needed.
//!
//! # Invariants
//!
//! 1. Guarantees only grow during iteration.
//! 2. For a final offer, `sum(guaranteed) + sum(proportional)` equals the
//!    available space whenever any track is weighted or the guarantees
//!    overflow; it never exceeds it.
//! 3. Tracks with weight 0 never receive proportional space.
//! 4. The result depends only on the cells, the config and the offer.

use chartkit_core::{Component, UNBOUNDED};
use serde::{Deserialize, Serialize};

use crate::cells::Cells;
use crate::config::GridConfig;

/// Space offered to the grid for one solver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutOffer {
    pub width: u32,
    pub height: u32,
    /// True when the parent will not offer anything else: the solver must
    /// fit inside the offer even below children's minimums.
    pub final_offer: bool,
}

impl LayoutOffer {
    /// A speculative offer, as made while a parent is still negotiating.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            final_offer: false,
        }
    }

    /// The authoritative offer a parent commits to.
    #[inline]
    #[must_use]
    pub const fn final_offer(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            final_offer: true,
        }
    }
}

/// Per-track sizes computed by [`solve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Minimum width guaranteed to each column.
    pub guaranteed_widths: Vec<u32>,
    /// Minimum height guaranteed to each row.
    pub guaranteed_heights: Vec<u32>,
    /// Extra width handed to each column.
    pub column_space: Vec<u32>,
    /// Extra height handed to each row.
    pub row_space: Vec<u32>,
    /// Some element would use more width than it was allocated.
    pub wants_width: bool,
    /// Some element would use more height than it was allocated.
    pub wants_height: bool,
}

impl LayoutResult {
    /// Final width of each column (guarantee plus share).
    #[must_use]
    pub fn column_widths(&self) -> Vec<u32> {
        add_tracks(&self.guaranteed_widths, &self.column_space)
    }

    /// Final height of each row (guarantee plus share).
    #[must_use]
    pub fn row_heights(&self) -> Vec<u32> {
        add_tracks(&self.guaranteed_heights, &self.row_space)
    }

    /// Sum of column guarantees, padding excluded.
    #[must_use]
    pub fn min_width(&self) -> u32 {
        total(&self.guaranteed_widths)
    }

    /// Sum of row guarantees, padding excluded.
    #[must_use]
    pub fn min_height(&self) -> u32 {
        total(&self.guaranteed_heights)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn is_fixed(self, component: &Component) -> bool {
        match self {
            Self::Horizontal => component.fixed_width(),
            Self::Vertical => component.fixed_height(),
        }
    }
}

/// Run the solver over `cells` for `offer`.
///
/// Pure with respect to the grid: elements are only queried, never laid out.
pub fn solve(cells: &Cells, config: &GridConfig, offer: LayoutOffer) -> LayoutResult {
    let num_rows = cells.num_rows();
    let num_cols = cells.num_cols();

    let available_width = offer
        .width
        .saturating_sub(config.total_column_padding(num_cols));
    let available_height = offer
        .height
        .saturating_sub(config.total_row_padding(num_rows));

    let column_weights = track_weights(cells, config, Axis::Horizontal);
    let row_weights = track_weights(cells, config, Axis::Vertical);

    let mut widths = vec![0u32; num_cols];
    let mut heights = vec![0u32; num_rows];
    for (row, col, component) in cells.iter() {
        let probe = component.requested_space(UNBOUNDED, UNBOUNDED);
        widths[col] = widths[col].max(probe.min_width);
        heights[row] = heights[row].max(probe.min_height);
    }

    let max_passes = (num_rows + num_cols).max(1);
    let mut passes = 0;
    let mut converged = false;
    while passes < max_passes {
        passes += 1;
        let column_space = distribute(free_space(available_width, &widths), &column_weights);
        let row_space = distribute(free_space(available_height, &heights), &row_weights);
        let changed = raise_guarantees(
            cells,
            &add_tracks(&widths, &column_space),
            &add_tracks(&heights, &row_space),
            &mut widths,
            &mut heights,
        );
        tracing::trace!(pass = passes, changed, "grid layout pass");

        if !changed {
            converged = true;
            break;
        }
        if offer.final_offer
            || total(&widths) > available_width
            || total(&heights) > available_height
        {
            break;
        }
    }

    let allocated_widths = shrink_to_fit(&widths, available_width);
    let allocated_heights = shrink_to_fit(&heights, available_height);
    let column_space = distribute(
        free_space(available_width, &allocated_widths),
        &column_weights,
    );
    let row_space = distribute(free_space(available_height, &allocated_heights), &row_weights);
    let (wants_width, wants_height) = unmet_wants(
        cells,
        &add_tracks(&allocated_widths, &column_space),
        &add_tracks(&allocated_heights, &row_space),
    );

    tracing::debug!(
        rows = num_rows,
        cols = num_cols,
        offered_width = offer.width,
        offered_height = offer.height,
        final_offer = offer.final_offer,
        passes,
        converged,
        wants_width,
        wants_height,
        "grid layout solved"
    );

    let (guaranteed_widths, guaranteed_heights) = if offer.final_offer {
        (allocated_widths, allocated_heights)
    } else {
        (widths, heights)
    };

    LayoutResult {
        guaranteed_widths,
        guaranteed_heights,
        column_space,
        row_space,
        wants_width,
        wants_height,
    }
}

/// Weight of every track on `axis`: explicit when configured, otherwise 0
/// for all-fixed tracks (empty cells count as fixed) and 1 for the rest.
fn track_weights(cells: &Cells, config: &GridConfig, axis: Axis) -> Vec<u32> {
    match axis {
        Axis::Horizontal => (0..cells.num_cols())
            .map(|col| {
                config.weight_of_column(col).unwrap_or_else(|| {
                    u32::from(!cells.column(col).all(|c| axis.is_fixed(c)))
                })
            })
            .collect(),
        Axis::Vertical => (0..cells.num_rows())
            .map(|row| {
                config
                    .weight_of_row(row)
                    .unwrap_or_else(|| u32::from(!cells.row(row).all(|c| axis.is_fixed(c))))
            })
            .collect(),
    }
}

/// Re-measure every element against the current allocation and raise the
/// guarantee of any track an element does not fit in.
fn raise_guarantees(
    cells: &Cells,
    offered_widths: &[u32],
    offered_heights: &[u32],
    widths: &mut [u32],
    heights: &mut [u32],
) -> bool {
    let mut changed = false;
    for (row, col, component) in cells.iter() {
        let request = component.requested_space(offered_widths[col], offered_heights[row]);
        if request.min_width > offered_widths[col] && request.min_width > widths[col] {
            widths[col] = request.min_width;
            changed = true;
        }
        if request.min_height > offered_heights[row] && request.min_height > heights[row] {
            heights[row] = request.min_height;
            changed = true;
        }
    }
    changed
}

/// Whether any element asks for more than the final allocation, per axis.
fn unmet_wants(cells: &Cells, widths: &[u32], heights: &[u32]) -> (bool, bool) {
    let mut wants_width = false;
    let mut wants_height = false;
    for (row, col, component) in cells.iter() {
        let request = component.requested_space(widths[col], heights[row]);
        wants_width |= request.min_width > widths[col];
        wants_height |= request.min_height > heights[row];
    }
    (wants_width, wants_height)
}

/// Split `free` pixels between tracks by weight.
///
/// Each track gets `floor(free * w / sum(w))`; the pixels lost to rounding
/// go one each to the first weighted tracks in ascending index order.
pub(crate) fn distribute(free: u32, weights: &[u32]) -> Vec<u32> {
    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if weight_sum == 0 || free == 0 {
        return vec![0; weights.len()];
    }

    let mut shares: Vec<u32> = weights
        .iter()
        .map(|&w| (u64::from(free) * u64::from(w) / weight_sum) as u32)
        .collect();

    let mut remainder = free - shares.iter().sum::<u32>();
    for (share, &weight) in shares.iter_mut().zip(weights) {
        if remainder == 0 {
            break;
        }
        if weight > 0 {
            *share += 1;
            remainder -= 1;
        }
    }
    shares
}

/// Cap `sizes` so they sum to at most `available`.
///
/// Max-min fair: every track keeps `min(size, level)` for the highest level
/// that fits, then leftover pixels go one each to the first capped tracks.
pub(crate) fn shrink_to_fit(sizes: &[u32], available: u32) -> Vec<u32> {
    if total(sizes) <= available {
        return sizes.to_vec();
    }

    let capped_sum =
        |level: u32| -> u64 { sizes.iter().map(|&s| u64::from(s.min(level))).sum() };

    let mut low = 0u32;
    let mut high = sizes.iter().copied().max().unwrap_or(0);
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        if capped_sum(mid) <= u64::from(available) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    let level = low;

    let mut leftover = (u64::from(available) - capped_sum(level)) as u32;
    let mut shrunk: Vec<u32> = sizes.iter().map(|&s| s.min(level)).collect();
    for (out, &size) in shrunk.iter_mut().zip(sizes) {
        if leftover == 0 {
            break;
        }
        if size > level {
            *out += 1;
            leftover -= 1;
        }
    }
    shrunk
}

fn free_space(available: u32, sizes: &[u32]) -> u32 {
    available.saturating_sub(total(sizes))
}

fn total(sizes: &[u32]) -> u32 {
    sizes.iter().fold(0u32, |acc, &s| acc.saturating_add(s))
}

fn add_tracks(a: &[u32], b: &[u32]) -> Vec<u32> {
    a.iter().zip(b).map(|(&x, &y)| x.saturating_add(y)).collect()
}
