//! The grid: a fixed-size 2D field of binary cells.
//!
//! ## Design
//!
//! - **Dense**: every coordinate in `[0,H)x[0,W)` has a defined state,
//!   stored row-major in a single `Vec<bool>`.
//! - **Immutable**: no public mutation API. The transition engine always
//!   derives a wholly new `Grid` from the previous one, which is what
//!   gives the simultaneous-update semantics their correctness.
//! - **Fixed dimensions**: width and height are set at construction and
//!   never change for the lifetime of a simulation run.

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// A rectangular field of cells, each alive or dead.
///
/// Created once at simulation start (from a caller-supplied initializer
/// or the [`RandomSeeder`](crate::seeder::RandomSeeder)); afterwards the
/// engine only ever builds fresh grids from old ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell states; `cells[row * width + col]`.
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where each cell's initial state is produced by
    /// `initializer(row, col)`.
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is zero.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut initializer: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(initializer(row, col));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create an all-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Get the cell state at `(row, col)`.
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate falls outside
    /// the grid extent. An out-of-bounds access indicates a bug in the
    /// caller and should be treated as fatal, not retried.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Grid dimensions as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Grid width (number of columns).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Row-major view of all cell states.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate over the coordinates of all live cells, in row-major order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(index, _)| (index / self.width, index % self.width))
    }

    /// In-bounds cell lookup without the `Result` wrapper.
    ///
    /// Callers that have already validated the coordinate (the engine's
    /// per-cell loops) use this to avoid re-checking.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }
}
