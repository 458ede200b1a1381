//! Error type shared by the grid store and the search engine.

use std::{error::Error, fmt};

use crate::grid::Point;

/// Failures reported by [`GridWorld`](crate::GridWorld) operations.
///
/// Coordinates are never clamped into the grid. Any operation handed a point outside of it fails
/// with [`WorldError::OutOfBounds`] and leaves the world untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// A coordinate fell outside the grid.
    OutOfBounds {
        /// The rejected coordinate.
        point: Point,
        /// Width of the grid the coordinate was checked against.
        width: usize,
        /// Height of the grid the coordinate was checked against.
        height: usize,
    },
    /// A grid was requested with a zero width or height.
    EmptyGrid,
    /// A grid was requested whose cell count does not fit in a `usize`.
    TooLarge {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// Path reconstruction found no neighbour with a strictly smaller distance.
    ///
    /// This happens when the distance field no longer matches the walls or endpoints, typically
    /// after an edit that was not followed by a reset.
    StalledBacktrace {
        /// The cell at which the backtrace could not descend any further.
        at: Point,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "{point} is outside of the {width}x{height} grid"),
            Self::EmptyGrid => write!(f, "grid dimensions must be positive"),
            Self::TooLarge { width, height } => {
                write!(f, "a {width}x{height} grid has too many cells to index")
            }
            Self::StalledBacktrace { at } => {
                write!(f, "path backtrace stalled at {at}; reset the search after edits")
            }
        }
    }
}

impl Error for WorldError {}
