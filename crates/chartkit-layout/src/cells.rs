//! Dense row-major cell storage.
//!
//! Every row has exactly `num_cols` slots, so the store is rectangular by
//! construction. The extent only ever grows; clearing a slot leaves it in
//! place as `None`.

use chartkit_core::Component;

/// A rectangular matrix of optional components.
#[derive(Debug, Clone, Default)]
pub struct Cells {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Component>>,
}

impl Cells {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The component at `(row, col)`; `None` for empty or out-of-range cells.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Component> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.slots[row * self.cols + col].as_ref()
    }

    /// Store `component` at `(row, col)`, growing the extent if needed.
    /// Returns the previous occupant.
    pub fn put(&mut self, row: usize, col: usize, component: Component) -> Option<Component> {
        self.grow_to(row + 1, col + 1);
        let cols = self.cols;
        self.slots[row * cols + col].replace(component)
    }

    /// Empty the slot at `(row, col)` and return its occupant.
    pub fn take(&mut self, row: usize, col: usize) -> Option<Component> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let cols = self.cols;
        self.slots[row * cols + col].take()
    }

    /// Ensure at least `rows` x `cols` slots, padding new ones with `None`.
    pub fn grow_to(&mut self, rows: usize, cols: usize) {
        let new_rows = rows.max(self.rows);
        let new_cols = cols.max(self.cols);
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }

        let mut old = std::mem::take(&mut self.slots).into_iter();
        let mut slots = Vec::with_capacity(new_rows * new_cols);
        for _ in 0..self.rows {
            slots.extend(old.by_ref().take(self.cols));
            slots.resize_with(slots.len() + (new_cols - self.cols), || None);
        }
        slots.resize_with(new_rows * new_cols, || None);

        self.slots = slots;
        self.rows = new_rows;
        self.cols = new_cols;
    }

    /// Occupied cells in row-major order, yielding `(row, col, component)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Component)> + '_ {
        let cols = self.cols.max(1);
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|c| (i / cols, i % cols, c)))
    }

    /// Occupied cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Component> + '_ {
        (0..self.cols).filter_map(move |col| self.get(row, col))
    }

    /// Occupied cells of one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Component> + '_ {
        (0..self.rows).filter_map(move |row| self.get(row, col))
    }
}
