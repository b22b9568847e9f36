//! # gol-sim
//!
//! A deterministic Game of Life simulation engine on a finite bounded grid.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: stepping is a pure function of the current
//!    grid. The only randomness in the crate is the seeded initial-grid
//!    generator, so a whole run is reproducible from its parameters.
//!
//! 2. **Simultaneous Updates By Construction**: the engine reads one grid
//!    and builds another; it never mutates a grid in place, so no cell can
//!    observe a neighbor's next-generation state.
//!
//! 3. **Display-Agnostic Driver**: rendering and pacing are injected as an
//!    observer callback, keeping the core unit-testable without a display.
//!
//! ## Boundary Policy
//!
//! Neighbor counting is edge-clamped: out-of-grid neighbor positions are
//! excluded from the count rather than wrapped to the opposite edge.
//! Border cells therefore see fewer than 8 neighbors.
//!
//! ## Modules
//!
//! - `core`: the grid, its errors, deterministic RNG
//! - `engine`: the B3/S23 transition function
//! - `driver`: the generation loop and observer seam
//! - `seeder`: random initial-grid generation
//! - `render`: ASCII frames for observers that want text output

pub mod core;
pub mod driver;
pub mod engine;
pub mod render;
pub mod seeder;

// Re-export commonly used types
pub use crate::core::{Grid, GridError, SimRng};
pub use crate::driver::Simulation;
pub use crate::engine::{live_neighbors, step};
pub use crate::render::AsciiRenderer;
pub use crate::seeder::RandomSeeder;
