//! Error types for grid construction and access.

use vivarium_core::Coord;

/// Errors arising from grid construction or out-of-range writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    #[error("coordinate {coord} out of bounds: [0, {width}) x [0, {height})")]
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell")]
    EmptySpace,
    /// A dimension exceeds the maximum representable coordinate.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest allowed size.
        max: u32,
    },
}
