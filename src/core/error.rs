//! Error types for grid construction and access.
//!
//! Both variants are fatal from the simulation's point of view:
//! `InvalidDimension` aborts setup, `OutOfBounds` signals a coordinate
//! bug in the caller. Neither is a transient condition, so nothing in
//! the crate retries.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::core::Grid) construction and access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid dimension was zero.
    #[error("invalid grid dimension: {width}x{height} (both must be positive)")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A coordinate access fell outside the grid extent.
    #[error("coordinate ({row}, {col}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}
