//! Grid geometry and wall storage.
//!
//! This module owns the mapping between cell coordinates and linear indices. Every per-cell array
//! in the crate is keyed by [`Grid::linear`], so the search state and the wall map can never
//! disagree about which cell an index refers to.

use std::fmt;

use crate::error::WorldError;

/// Neighbour offsets in scan order: left, up, down, right.
///
/// Both relaxation and path backtrace walk neighbours in this order, which makes tie-breaking
/// between equally distant cells deterministic.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Cell coordinate on the grid.
///
/// The origin is the top-left cell, `x` grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Point {
    /// Builds a point from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size grid holding one wall flag per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Number of cells, checked against overflow on construction.
    cells: usize,
    /// Wall flags in row-major order, `true` meaning impassable.
    walls: Vec<bool>,
}

impl Grid {
    /// Creates a grid with no walls.
    ///
    /// # Errors
    ///
    /// - [`WorldError::EmptyGrid`] if either dimension is zero.
    /// - [`WorldError::TooLarge`] if the cell count overflows a `usize`.
    pub(crate) fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::EmptyGrid);
        }

        let cells = width
            .checked_mul(height)
            .ok_or(WorldError::TooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            cells,
            walls: vec![false; cells],
        })
    }

    /// Number of columns.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub(crate) const fn cell_count(&self) -> usize {
        self.cells
    }

    /// Whether the point lies inside the grid.
    pub(crate) const fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Linear index of an in-bounds point.
    ///
    /// Callers must have validated the point first, either through [`Grid::index_of`] or because
    /// it was produced by the grid itself.
    pub(crate) const fn linear(&self, point: Point) -> usize {
        point.y * self.width + point.x
    }

    /// Inverse of [`Grid::linear`].
    pub(crate) const fn point_at(&self, index: usize) -> Point {
        Point::new(index % self.width, index / self.width)
    }

    /// Validated linear index of a point.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub(crate) const fn index_of(&self, point: Point) -> Result<usize, WorldError> {
        if self.contains(point) {
            Ok(self.linear(point))
        } else {
            Err(WorldError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Wall flag of the cell at `point`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub(crate) fn wall_at(&self, point: Point) -> Result<bool, WorldError> {
        let index = self.index_of(point)?;
        Ok(self.is_blocked(index))
    }

    /// Overwrites the wall flag of the cell at `point`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub(crate) fn set_wall_at(&mut self, point: Point, value: bool) -> Result<(), WorldError> {
        let index = self.index_of(point)?;
        if let Some(cell) = self.walls.get_mut(index) {
            *cell = value;
        }

        Ok(())
    }

    /// Wall flag by linear index. Indices past the end count as walls.
    pub(crate) fn is_blocked(&self, index: usize) -> bool {
        self.walls.get(index).copied().unwrap_or(true)
    }

    /// In-bounds, axis-aligned neighbours of `point`, in [`NEIGHBOUR_OFFSETS`] order.
    pub(crate) fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOUR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let neighbour = Point::new(
                point.x.checked_add_signed(dx)?,
                point.y.checked_add_signed(dy)?,
            );
            self.contains(neighbour).then_some(neighbour)
        })
    }
}
