//! Core types: the grid, its errors, and deterministic RNG.
//!
//! These are the building blocks the engine and driver are written
//! against. Nothing here knows about the transition rule.

pub mod error;
pub mod grid;
pub mod rng;

pub use error::GridError;
pub use grid::Grid;
pub use rng::SimRng;
