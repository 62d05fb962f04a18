#![forbid(unsafe_code)]

//! Core: geometry, the element capability, and component membership.
//!
//! # Role in chartkit
//! `chartkit-core` is the contract between containers and their children.
//! Leaf elements (axes, plots, labels) implement [`Element`]; containers
//! store [`Component`] handles, which add identity, a parent back-reference
//! and detach notification on top of an element.
//!
//! # How it fits in the system
//! `chartkit-layout` builds the grid container on top of these types. The
//! rendering backend is not involved: an element learns its final box
//! through [`Element::compute_layout`] and draws however it likes.

pub mod component;
pub mod element;
pub mod geometry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use component::{Component, ComponentId, ContainerId, DetachSubscription};
pub use element::{Element, SpaceRequest, Spacer, UNBOUNDED};
pub use geometry::{Point, Rect};
