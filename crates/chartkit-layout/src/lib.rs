#![forbid(unsafe_code)]

//! Table layout for chartkit: the grid container and its solver.
//!
//! # Role in chartkit
//! A chart is assembled as a table of components: a plot in the middle,
//! axes and titles around it, a legend to one side. [`Grid`] stores that
//! table and decides how big each row and column is, given the space its
//! parent offers.
//!
//! # Layout negotiation
//! The parent first asks [`Grid::requested_space`] one or more times with
//! tentative offers. Nothing is placed during those queries. It then commits
//! with [`Grid::compute_layout`], which solves once more as a final offer and
//! hands every child its box.
//!
//! The solver ([`solver::solve`]) starts from each element's unconstrained
//! minimum, splits the remaining space between rows and columns by weight,
//! re-measures every element against its tentative cell and repeats until
//! the guarantees settle.
//!
//! ```
//! use chartkit_core::{Component, Rect, Spacer};
//! use chartkit_layout::Grid;
//!
//! let cells: Vec<Vec<Option<Component>>> = (0..2)
//!     .map(|_| (0..2).map(|_| Some(Component::new(Spacer))).collect())
//!     .collect();
//! let grid = Grid::from_rows(cells.clone()).unwrap();
//!
//! grid.compute_layout(Rect::from_size(400, 400));
//! let boxes: Vec<Rect> = cells.iter().flatten().flatten().map(|c| c.bounds()).collect();
//! assert_eq!(
//!     boxes,
//!     vec![
//!         Rect::new(0, 0, 200, 200),
//!         Rect::new(200, 0, 200, 200),
//!         Rect::new(0, 200, 200, 200),
//!         Rect::new(200, 200, 200, 200),
//!     ]
//! );
//! ```

pub mod cells;
pub mod config;
pub mod error;
pub mod grid;
pub mod positioner;
pub mod solver;

pub use cells::Cells;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{Grid, GridRequest, MAX_CELLS, MAX_EXTENT};
pub use positioner::GridPlacement;
pub use solver::{LayoutOffer, LayoutResult};
