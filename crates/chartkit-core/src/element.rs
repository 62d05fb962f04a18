//! The capability every child of a container must provide.
//!
//! A container negotiates space with its children through three questions:
//! how much space do you need given this offer, is your width fixed, and is
//! your height fixed. Once it commits to an allocation it hands each child a
//! box via [`Element::compute_layout`].
//!
//! Membership (parent back-reference, detach notification) is not part of
//! the element itself; it lives on [`Component`](crate::Component), the
//! shared handle containers store.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Offer used when probing an element's natural minimum.
///
/// Elements receiving this value must treat it as "no constraint" and use
/// saturating arithmetic on it.
pub const UNBOUNDED: u32 = u32::MAX;

/// Minimum space an element needs for a given offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceRequest {
    pub min_width: u32,
    pub min_height: u32,
}

impl SpaceRequest {
    /// A request that needs no space at all.
    pub const NONE: Self = Self {
        min_width: 0,
        min_height: 0,
    };

    #[inline]
    #[must_use]
    pub const fn new(min_width: u32, min_height: u32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }
}

/// Layout capability of a child element.
///
/// `requested_space` must be pure: containers call it speculatively, many
/// times, with different offers before they commit to one.
pub trait Element {
    /// Minimum size this element needs when offered `available_width` by
    /// `available_height` pixels.
    fn requested_space(&self, available_width: u32, available_height: u32) -> SpaceRequest;

    /// True when the minimum width does not depend on the offer and the
    /// element never benefits from extra width.
    fn fixed_width(&self) -> bool {
        false
    }

    /// Height counterpart of [`fixed_width`](Element::fixed_width).
    fn fixed_height(&self) -> bool {
        false
    }

    /// Accept the final box assigned by the container.
    fn compute_layout(&mut self, _bounds: Rect) {}
}

/// An element with no content: needs nothing, takes whatever it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer;

impl Element for Spacer {
    fn requested_space(&self, _available_width: u32, _available_height: u32) -> SpaceRequest {
        SpaceRequest::NONE
    }
}
