//! Deterministic element doubles for layout tests.
//!
//! Enabled with the `test-helpers` feature. Each double is cheap to clone;
//! clones share their size state, so a test can keep one handle and mutate
//! sizes while the other sits inside a container.

use std::cell::Cell;
use std::rc::Rc;

use crate::element::{Element, SpaceRequest};

/// An element with an optional fixed minimum on each axis.
///
/// A fixed axis requests exactly its size regardless of the offer. An unset
/// axis requests nothing and is flexible.
#[derive(Debug, Clone, Default)]
pub struct FixedSize {
    width: Rc<Cell<Option<u32>>>,
    height: Rc<Cell<Option<u32>>>,
}

impl FixedSize {
    /// Fixed on both axes.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_axes(Some(width), Some(height))
    }

    /// Fixed only on the axes given as `Some`.
    #[must_use]
    pub fn with_axes(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
            height: Rc::new(Cell::new(height)),
        }
    }

    /// Change the fixed sizes; visible through every clone.
    pub fn fix(&self, width: Option<u32>, height: Option<u32>) {
        self.width.set(width);
        self.height.set(height);
    }
}

impl Element for FixedSize {
    fn requested_space(&self, _available_width: u32, _available_height: u32) -> SpaceRequest {
        SpaceRequest::new(
            self.width.get().unwrap_or(0),
            self.height.get().unwrap_or(0),
        )
    }

    fn fixed_width(&self) -> bool {
        self.width.get().is_some()
    }

    fn fixed_height(&self) -> bool {
        self.height.get().is_some()
    }
}

/// A flexible element with a minimum size: needs at least `min`, happily
/// grows into anything beyond it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinSize {
    pub min_width: u32,
    pub min_height: u32,
}

impl MinSize {
    #[must_use]
    pub const fn new(min_width: u32, min_height: u32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }
}

impl Element for MinSize {
    fn requested_space(&self, _available_width: u32, _available_height: u32) -> SpaceRequest {
        SpaceRequest::new(self.min_width, self.min_height)
    }
}

/// Wrapping text: `len` glyphs of `glyph_width` x `line_height` pixels.
///
/// Minimum width is one glyph. Minimum height is the number of lines needed
/// to wrap the text at the offered width, so narrower columns force taller
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowText {
    pub len: u32,
    pub glyph_width: u32,
    pub line_height: u32,
}

impl ReflowText {
    #[must_use]
    pub const fn new(len: u32, glyph_width: u32, line_height: u32) -> Self {
        Self {
            len,
            glyph_width,
            line_height,
        }
    }

    /// Lines needed at `width` pixels.
    #[must_use]
    pub fn lines_at(&self, width: u32) -> u32 {
        if self.len == 0 {
            return 0;
        }
        let per_line = (width / self.glyph_width.max(1)).max(1);
        self.len.div_ceil(per_line)
    }
}

impl Element for ReflowText {
    fn requested_space(&self, available_width: u32, _available_height: u32) -> SpaceRequest {
        let min_width = if self.len == 0 { 0 } else { self.glyph_width };
        SpaceRequest::new(
            min_width,
            self.lines_at(available_width).saturating_mul(self.line_height),
        )
    }
}
