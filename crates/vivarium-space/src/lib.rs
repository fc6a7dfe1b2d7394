//! Spatial storage for Vivarium simulations.
//!
//! [`Grid`] is a fixed-size, dense, row-major 2D array of optional cell
//! values. It knows nothing about occupancy rules or turn order: callers
//! (the world scheduler) decide what may be written where.
//!
//! Traversal is always row-major (`y` ascending, then `x` ascending).
//! The scheduler depends on that order to decide who acts first.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::{Grid, RowMajor};
