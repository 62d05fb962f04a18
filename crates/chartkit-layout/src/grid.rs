#![forbid(unsafe_code)]

//! Table-style grid container.
//!
//! A [`Grid`] owns a rectangular matrix of [`Component`]s. It negotiates
//! space with its parent in two phases: speculative queries through
//! [`Grid::requested_space`], then one committed [`Grid::compute_layout`]
//! that places every child.
//!
//! # Example
//!
//! ```
//! use chartkit_core::{Component, Rect, Spacer};
//! use chartkit_layout::Grid;
//!
//! let plot = Component::new(Spacer);
//! let legend = Component::new(Spacer);
//!
//! let grid = Grid::new();
//! grid.add(plot.clone(), 0, 0).unwrap();
//! grid.add(legend.clone(), 0, 1).unwrap();
//! grid.set_column_padding(10);
//!
//! grid.compute_layout(Rect::from_size(210, 100));
//! assert_eq!(plot.bounds(), Rect::new(0, 0, 100, 100));
//! assert_eq!(legend.bounds(), Rect::new(110, 0, 100, 100));
//! ```
//!
//! # Membership
//!
//! A component lives in at most one cell of one container. Adding a
//! component that already has a parent detaches it first, so the previous
//! owner (this grid or another) clears its cell. The grid subscribes to each
//! child's detach notification, so `component.detach()` from anywhere empties
//! the cell before it returns.
//!
//! The grid never holds its interior borrow while calling into a child, so
//! children and detach observers may re-enter it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chartkit_core::{
    Component, ComponentId, ContainerId, DetachSubscription, Element, Rect, SpaceRequest,
};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cells::Cells;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::positioner::GridPlacement;
use crate::solver::{self, LayoutOffer, LayoutResult};

/// Row and column indices must stay below this bound.
pub const MAX_EXTENT: usize = u16::MAX as usize;

/// Upper bound on `rows * cols` after growing to cover a new cell.
pub const MAX_CELLS: usize = 1 << 20;

/// Aggregate answer to a speculative space query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridRequest {
    /// Sum of column guarantees plus column padding.
    pub min_width: u32,
    /// Sum of row guarantees plus row padding.
    pub min_height: u32,
    /// Some child would use more width than the offer allows.
    pub wants_width: bool,
    /// Some child would use more height than the offer allows.
    pub wants_height: bool,
}

impl GridRequest {
    /// The minimum size alone, as reported to a parent container.
    #[inline]
    #[must_use]
    pub const fn space(&self) -> SpaceRequest {
        SpaceRequest::new(self.min_width, self.min_height)
    }
}

struct Membership {
    row: usize,
    col: usize,
    _subscription: DetachSubscription,
}

struct GridState {
    cells: Cells,
    members: FxHashMap<ComponentId, Membership>,
    config: GridConfig,
}

impl GridState {
    fn new(config: GridConfig) -> Self {
        Self {
            cells: Cells::new(),
            members: FxHashMap::default(),
            config,
        }
    }

    /// Reject a cell whose index, or the extent needed to cover it, is out
    /// of bounds.
    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= MAX_EXTENT || col >= MAX_EXTENT {
            return Err(GridError::InvalidIndex { row, col });
        }
        let rows = self.cells.num_rows().max(row + 1);
        let cols = self.cells.num_cols().max(col + 1);
        if rows.checked_mul(cols).is_none_or(|n| n > MAX_CELLS) {
            return Err(GridError::InvalidIndex { row, col });
        }
        Ok(())
    }

    /// Forget `id`: clear its cell and drop the detach subscription.
    fn take_member(&mut self, id: ComponentId) -> Option<Component> {
        let membership = self.members.remove(&id)?;
        self.cells.take(membership.row, membership.col)
    }
}

// Children of a dropped grid are left parentless.
impl Drop for GridState {
    fn drop(&mut self) {
        self.members.clear();
        for (_, _, component) in self.cells.iter() {
            component.detach();
        }
    }
}

/// A grid container.
///
/// Cloning a `Grid` creates a new handle to the **same** grid.
///
/// # Invariants
///
/// 1. Every row has the same number of cells; the extent never shrinks.
/// 2. A component occupies at most one cell, and `component.parent()` is
///    this grid's id exactly while it does.
/// 3. Failed mutations leave the grid unchanged, except that a component
///    claimed elsewhere mid-move has already left its old cell.
/// 4. `requested_space`, `solve`, `fixed_width` and `fixed_height` do not
///    mutate the grid or its children.
#[derive(Clone)]
pub struct Grid {
    id: ContainerId,
    state: Rc<RefCell<GridState>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Grid")
            .field("id", &self.id)
            .field("rows", &state.cells.num_rows())
            .field("cols", &state.cells.num_cols())
            .field("members", &state.members.len())
            .field("config", &state.config)
            .finish()
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create an empty grid with the given spacing and weights.
    #[must_use]
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            id: ContainerId::next(),
            state: Rc::new(RefCell::new(GridState::new(config))),
        }
    }

    /// Build a grid from rows of optional components.
    ///
    /// The extent covers every row and the longest row, empty slots
    /// included. A component listed twice ends up in its last position.
    pub fn from_rows<R, C>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Option<Component>>,
    {
        let grid = Self::new();
        for (row, slots) in rows.into_iter().enumerate() {
            for (col, slot) in slots.into_iter().enumerate() {
                grid.state.borrow().check_index(row, col)?;
                match slot {
                    Some(component) => grid.add(component, row, col)?,
                    None => grid.state.borrow_mut().cells.grow_to(row + 1, col + 1),
                }
            }
        }
        Ok(grid)
    }

    /// This grid's identity, as seen by [`Component::parent`].
    #[inline]
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Place `component` at `(row, col)`.
    ///
    /// Accepts a `Component` or an `Option<Component>`; `None` is rejected
    /// with [`GridError::NullElement`]. A component that already has a
    /// parent is detached from it first. The grid grows to cover the cell.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidIndex`] when an index reaches [`MAX_EXTENT`] or
    /// the grown grid would exceed [`MAX_CELLS`], [`GridError::OccupiedCell`]
    /// when the cell already holds a component (even the same one). The grid
    /// is left untouched on these errors.
    ///
    /// [`GridError::Reattached`] when a detach observer hands the component
    /// to another container during the move. The component stays where the
    /// observer put it and this grid does not adopt it.
    pub fn add(&self, component: impl Into<Option<Component>>, row: usize, col: usize) -> Result<()> {
        let component = component
            .into()
            .ok_or(GridError::NullElement { row, col })?;
        {
            let state = self.state.borrow();
            state.check_index(row, col)?;
            if state.cells.get(row, col).is_some() {
                return Err(GridError::OccupiedCell { row, col });
            }
        }

        if component.parent().is_some() {
            component.detach();
            if component.parent().is_some() {
                return Err(GridError::Reattached { row, col });
            }
        }

        let mut state = self.state.borrow_mut();
        // Detach observers may have grown the grid or filled the cell.
        state.check_index(row, col)?;
        if state.cells.get(row, col).is_some() {
            return Err(GridError::OccupiedCell { row, col });
        }
        let weak = Rc::downgrade(&self.state);
        let subscription = component.on_detach(move |detached| {
            if let Some(state) = weak.upgrade() {
                let taken = state.borrow_mut().take_member(detached.id());
                drop(taken);
            }
        });
        state.cells.put(row, col, component.clone());
        state.members.insert(
            component.id(),
            Membership {
                row,
                col,
                _subscription: subscription,
            },
        );
        drop(state);

        component.attach(self.id);
        tracing::trace!(grid = %self.id, component = %component.id(), row, col, "component added");
        Ok(())
    }

    /// Take `component` out of the grid.
    ///
    /// Clears its cell, drops the grid's detach subscription and detaches the
    /// component (clearing its parent and notifying other observers). Does
    /// nothing if the component is not in this grid.
    pub fn remove(&self, component: &Component) {
        let taken = self.state.borrow_mut().take_member(component.id());
        if taken.is_some() {
            component.detach();
            tracing::trace!(grid = %self.id, component = %component.id(), "component removed");
        }
    }

    /// True if `component` occupies a cell of this grid.
    #[must_use]
    pub fn has(&self, component: &Component) -> bool {
        self.state.borrow().members.contains_key(&component.id())
    }

    /// The component at `(row, col)`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn component_at(&self, row: usize, col: usize) -> Option<Component> {
        self.state.borrow().cells.get(row, col).cloned()
    }

    /// Position of `component`, if it is in this grid.
    #[must_use]
    pub fn position_of(&self, component: &Component) -> Option<(usize, usize)> {
        self.state
            .borrow()
            .members
            .get(&component.id())
            .map(|m| (m.row, m.col))
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.state.borrow().cells.num_rows()
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.state.borrow().cells.num_cols()
    }

    /// Number of components in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().members.is_empty()
    }

    /// All components in row-major order.
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        self.state
            .borrow()
            .cells
            .iter()
            .map(|(_, _, c)| c.clone())
            .collect()
    }

    /// Set the padding between rows; applies from the next layout pass.
    pub fn set_row_padding(&self, pixels: u32) {
        self.state.borrow_mut().config.row_padding = pixels;
    }

    /// Set the padding between columns; applies from the next layout pass.
    pub fn set_column_padding(&self, pixels: u32) {
        self.state.borrow_mut().config.column_padding = pixels;
    }

    #[must_use]
    pub fn row_padding(&self) -> u32 {
        self.state.borrow().config.row_padding
    }

    #[must_use]
    pub fn column_padding(&self) -> u32 {
        self.state.borrow().config.column_padding
    }

    /// Set or clear an explicit weight for `row`.
    pub fn set_row_weight(&self, row: usize, weight: Option<u32>) {
        self.state.borrow_mut().config.set_row_weight(row, weight);
    }

    /// Set or clear an explicit weight for `col`.
    pub fn set_column_weight(&self, col: usize, weight: Option<u32>) {
        self.state.borrow_mut().config.set_column_weight(col, weight);
    }

    /// Current spacing and weight configuration.
    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.state.borrow().config.clone()
    }

    /// Replace the spacing and weight configuration.
    pub fn apply_config(&self, config: GridConfig) {
        self.state.borrow_mut().config = config;
    }

    /// True if every child has a fixed width (vacuously true when empty).
    #[must_use]
    pub fn fixed_width(&self) -> bool {
        self.components().iter().all(Component::fixed_width)
    }

    /// True if every child has a fixed height (vacuously true when empty).
    #[must_use]
    pub fn fixed_height(&self) -> bool {
        self.components().iter().all(Component::fixed_height)
    }

    /// Run the layout solver for `offer` without touching any child.
    #[must_use]
    pub fn solve(&self, offer: LayoutOffer) -> LayoutResult {
        let (cells, config) = self.snapshot();
        solver::solve(&cells, &config, offer)
    }

    /// Speculative space query: the minimum size this grid needs for the
    /// offer, and whether it would use more.
    #[must_use]
    pub fn requested_space(&self, available_width: u32, available_height: u32) -> GridRequest {
        let (cells, config) = self.snapshot();
        let result = solver::solve(
            &cells,
            &config,
            LayoutOffer::new(available_width, available_height),
        );
        GridRequest {
            min_width: result
                .min_width()
                .saturating_add(config.total_column_padding(cells.num_cols())),
            min_height: result
                .min_height()
                .saturating_add(config.total_row_padding(cells.num_rows())),
            wants_width: result.wants_width,
            wants_height: result.wants_height,
        }
    }

    /// Commit to `bounds`: solve as a final offer and give every child its
    /// box, relative to `bounds`' origin.
    pub fn compute_layout(&self, bounds: Rect) -> GridPlacement {
        let _span = tracing::debug_span!(
            "grid_compute_layout",
            grid = %self.id,
            x = bounds.x,
            y = bounds.y,
            w = bounds.width,
            h = bounds.height
        )
        .entered();

        let (cells, config) = self.snapshot();
        let result = solver::solve(
            &cells,
            &config,
            LayoutOffer::final_offer(bounds.width, bounds.height),
        );
        let placement = GridPlacement::new(&result, &config, bounds.origin());
        placement.place(&cells);
        placement
    }

    /// Copy of the cells and config, so children are called with no borrow
    /// held.
    fn snapshot(&self) -> (Cells, GridConfig) {
        let state = self.state.borrow();
        (state.cells.clone(), state.config.clone())
    }
}

/// A grid nests inside another container like any other element.
impl Element for Grid {
    fn requested_space(&self, available_width: u32, available_height: u32) -> SpaceRequest {
        Grid::requested_space(self, available_width, available_height).space()
    }

    fn fixed_width(&self) -> bool {
        Grid::fixed_width(self)
    }

    fn fixed_height(&self) -> bool {
        Grid::fixed_height(self)
    }

    fn compute_layout(&mut self, bounds: Rect) {
        Grid::compute_layout(self, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit_core::Spacer;
    use chartkit_core::test_helpers::FixedSize;
    use tracing_test::traced_test;

    fn spacer() -> Component {
        Component::new(Spacer)
    }

    #[test]
    fn empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
        assert!(grid.is_empty());
        assert!(grid.component_at(0, 0).is_none());
    }

    #[test]
    fn add_pads_other_cells_with_none() {
        let grid = Grid::new();
        let c11 = spacer();
        grid.add(c11.clone(), 1, 1).unwrap();

        assert_eq!(grid.component_at(1, 1), Some(c11.clone()));
        assert!(grid.component_at(0, 0).is_none());
        assert!(grid.component_at(0, 1).is_none());
        assert!(grid.component_at(1, 0).is_none());
        assert_eq!(c11.parent(), Some(grid.id()));
        assert_eq!(grid.position_of(&c11), Some((1, 1)));
    }

    #[test]
    fn occupied_cell_is_rejected_without_mutation() {
        let first = spacer();
        let grid = Grid::from_rows([[Some(first.clone())]]).unwrap();
        let second = spacer();

        let err = grid.add(second.clone(), 0, 0).unwrap_err();
        assert_eq!(err, GridError::OccupiedCell { row: 0, col: 0 });
        assert_eq!(grid.component_at(0, 0), Some(first));
        assert_eq!((grid.num_rows(), grid.num_cols()), (1, 1));
        assert!(!grid.has(&second));
        assert_eq!(second.parent(), None);
    }

    #[test]
    fn null_element_is_rejected_without_mutation() {
        let grid = Grid::new();
        let err = grid.add(None::<Component>, 3, 3).unwrap_err();
        assert_eq!(err, GridError::NullElement { row: 3, col: 3 });
        assert_eq!((grid.num_rows(), grid.num_cols()), (0, 0));
    }

    #[test]
    fn huge_index_is_rejected() {
        let grid = Grid::new();
        let c = spacer();
        let err = grid.add(c.clone(), MAX_EXTENT, 0).unwrap_err();
        assert_eq!(err, GridError::InvalidIndex { row: MAX_EXTENT, col: 0 });
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(c.parent(), None);
    }

    #[test]
    fn extent_is_bounded_by_total_cells() {
        let grid = Grid::new();
        let c = spacer();
        let err = grid.add(c.clone(), 65_534, 65_534).unwrap_err();
        assert_eq!(err, GridError::InvalidIndex { row: 65_534, col: 65_534 });

        grid.add(spacer(), 0, 1023).unwrap();
        assert_eq!(
            grid.add(c.clone(), 1024, 0),
            Err(GridError::InvalidIndex { row: 1024, col: 0 })
        );
        assert_eq!((grid.num_rows(), grid.num_cols()), (1, 1024));
        assert_eq!(c.parent(), None);

        grid.add(c, 1023, 0).unwrap();
        assert_eq!((grid.num_rows(), grid.num_cols()), (1024, 1024));
    }

    #[test]
    fn from_rows_rejects_oversized_extent() {
        let mut rows: Vec<Vec<Option<Component>>> = vec![vec![None; MAX_EXTENT]];
        rows.extend((0..15).map(|_| Vec::new()));
        rows.push(vec![None]);

        let err = Grid::from_rows(rows).unwrap_err();
        assert_eq!(err, GridError::InvalidIndex { row: 16, col: 0 });
    }

    #[test]
    fn observer_claiming_component_mid_move_keeps_it() {
        let elsewhere = ContainerId::next();
        let c = spacer();
        let first = Grid::new();
        first.add(c.clone(), 0, 0).unwrap();

        let claimer = c.clone();
        let _sub = c.on_detach(move |_| claimer.attach(elsewhere));

        let second = Grid::new();
        assert_eq!(
            second.add(c.clone(), 1, 1),
            Err(GridError::Reattached { row: 1, col: 1 })
        );
        assert_eq!(c.parent(), Some(elsewhere));
        assert!(!second.has(&c));
        assert!(second.component_at(1, 1).is_none());
        assert_eq!((second.num_rows(), second.num_cols()), (0, 0));
        assert!(!first.has(&c));
        assert!(first.component_at(0, 0).is_none());
    }

    #[test]
    fn relocation_within_grid() {
        let grid = Grid::new();
        let c = spacer();
        grid.add(c.clone(), 0, 0).unwrap();
        grid.add(c.clone(), 1, 2).unwrap();

        assert!(grid.component_at(0, 0).is_none());
        assert_eq!(grid.component_at(1, 2), Some(c.clone()));
        assert_eq!(grid.len(), 1);
        assert_eq!(c.parent(), Some(grid.id()));
    }

    #[test]
    fn relocation_between_grids() {
        let a = Grid::new();
        let b = Grid::new();
        let c = spacer();
        a.add(c.clone(), 0, 0).unwrap();
        b.add(c.clone(), 0, 0).unwrap();

        assert!(!a.has(&c));
        assert!(a.component_at(0, 0).is_none());
        assert!(b.has(&c));
        assert_eq!(c.parent(), Some(b.id()));

        // Only the new owner reacts to a later detach.
        a.add(spacer(), 0, 0).unwrap();
        c.detach();
        assert!(!b.has(&c));
        assert!(b.component_at(0, 0).is_none());
        assert!(a.component_at(0, 0).is_some());
    }

    #[test]
    fn re_adding_to_same_cell_is_occupied() {
        let grid = Grid::new();
        let c = spacer();
        grid.add(c.clone(), 0, 0).unwrap();
        assert_eq!(
            grid.add(c.clone(), 0, 0),
            Err(GridError::OccupiedCell { row: 0, col: 0 })
        );
        assert!(grid.has(&c));
        assert_eq!(c.parent(), Some(grid.id()));
    }

    #[test]
    fn remove_is_idempotent() {
        let c1 = spacer();
        let c2 = spacer();
        let grid = Grid::from_rows([[Some(c1.clone()), Some(c2.clone())]]).unwrap();

        grid.remove(&c1);
        assert!(grid.component_at(0, 0).is_none());
        assert_eq!(c1.parent(), None);
        assert_eq!(c1.detach_subscriber_count(), 0);

        grid.remove(&c1);
        assert!(grid.component_at(0, 0).is_none());
        assert_eq!(grid.component_at(0, 1), Some(c2));
        assert_eq!((grid.num_rows(), grid.num_cols()), (1, 2));
    }

    #[test]
    fn remove_notifies_other_observers() {
        let c = spacer();
        let grid = Grid::from_rows([[Some(c.clone())]]).unwrap();
        let seen = Rc::new(std::cell::Cell::new(false));
        let seen_clone = Rc::clone(&seen);
        let _sub = c.on_detach(move |_| seen_clone.set(true));

        grid.remove(&c);
        assert!(seen.get());
    }

    #[test]
    fn detach_clears_cell() {
        let c = spacer();
        let grid = Grid::from_rows([[Some(c.clone())]]).unwrap();

        c.detach();
        assert!(grid.component_at(0, 0).is_none());
        assert!(!grid.has(&c));
        assert_eq!(c.parent(), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn dropping_grid_releases_children() {
        let c = spacer();
        {
            let grid = Grid::new();
            grid.add(c.clone(), 0, 0).unwrap();
        }
        assert_eq!(c.parent(), None);

        let other = Grid::new();
        other.add(c.clone(), 0, 0).unwrap();
        assert_eq!(c.parent(), Some(other.id()));
    }

    #[test]
    fn fixity_is_and_over_children() {
        let grid = Grid::new();
        assert!(grid.fixed_width());
        assert!(grid.fixed_height());

        let a = FixedSize::new(10, 10);
        let b = FixedSize::new(10, 10);
        grid.add(Component::new(a.clone()), 0, 0).unwrap();
        grid.add(Component::new(b.clone()), 2, 2).unwrap();
        assert!(grid.fixed_width() && grid.fixed_height());

        a.fix(None, Some(10));
        assert!(!grid.fixed_width());
        assert!(grid.fixed_height());

        b.fix(Some(10), None);
        a.fix(Some(10), Some(10));
        assert!(grid.fixed_width());
        assert!(!grid.fixed_height());
    }

    #[test]
    fn requested_space_includes_padding() {
        let grid = Grid::new();
        grid.add(Component::new(FixedSize::new(50, 20)), 0, 0).unwrap();
        grid.add(Component::new(FixedSize::new(30, 40)), 1, 1).unwrap();
        grid.set_row_padding(3);
        grid.set_column_padding(7);

        let request = grid.requested_space(500, 500);
        assert_eq!(request.min_width, 50 + 30 + 7);
        assert_eq!(request.min_height, 20 + 40 + 3);
        assert!(!request.wants_width && !request.wants_height);
        assert_eq!(request.space(), SpaceRequest::new(87, 63));
    }

    #[test]
    fn mixed_table_request_ignores_offer() {
        let grid = Grid::from_rows([
            [Some(spacer()), Some(Component::new(FixedSize::new(50, 50)))],
            [
                Some(Component::new(FixedSize::new(20, 50))),
                Some(Component::new(FixedSize::new(20, 20))),
            ],
        ])
        .unwrap();

        for (w, h) in [(0, 0), (10, 10), (70, 100), (500, 500), (u32::MAX, u32::MAX)] {
            let request = grid.requested_space(w, h);
            assert_eq!(request.space(), SpaceRequest::new(70, 100), "offer {w}x{h}");
        }
    }

    #[test]
    fn requested_space_does_not_lay_out_children() {
        let c = spacer();
        let grid = Grid::from_rows([[Some(c.clone())]]).unwrap();
        let first = grid.requested_space(100, 100);
        let second = grid.requested_space(100, 100);

        assert_eq!(first, second);
        assert_eq!(c.bounds(), Rect::default());
    }

    #[test]
    fn config_round_trips_through_grid() {
        let grid = Grid::with_config(GridConfig::new().padding(4).column_weight(1, 2));
        assert_eq!(grid.row_padding(), 4);
        assert_eq!(grid.column_padding(), 4);

        grid.set_column_weight(1, None);
        grid.set_row_weight(0, Some(5));
        let config = grid.config();
        assert_eq!(config.weight_of_column(1), None);
        assert_eq!(config.weight_of_row(0), Some(5));

        grid.apply_config(GridConfig::new());
        assert_eq!(grid.row_padding(), 0);
    }

    #[test]
    fn clones_share_state() {
        let grid = Grid::new();
        let handle = grid.clone();
        let c = spacer();
        handle.add(c.clone(), 0, 0).unwrap();

        assert!(grid.has(&c));
        assert_eq!(grid.id(), handle.id());
    }

    #[test]
    #[traced_test]
    fn layout_is_traced() {
        let grid = Grid::from_rows([[Some(spacer())]]).unwrap();
        grid.compute_layout(Rect::from_size(10, 10));

        assert!(logs_contain("component added"));
        assert!(logs_contain("grid layout solved"));
        assert!(logs_contain("final_offer=true"));
    }
}
