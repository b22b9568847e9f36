//! The simulation driver: owns the current grid and advances generations.
//!
//! The driver is the only owner of the "current" grid. Each step it asks
//! the [`engine`](crate::engine) for the next grid, replaces its current
//! grid with it, and hands the new grid to the caller's observer. The
//! superseded grid is dropped as soon as its successor exists, so at most
//! two grids are alive at any instant and no history is retained.
//!
//! Rendering, pacing, and any other side effects live entirely in the
//! observer; the driver itself is deterministic and display-agnostic.

use log::{debug, trace};

use crate::core::Grid;
use crate::engine;

/// Drives a simulation forward one generation at a time.
pub struct Simulation {
    current: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a driver that starts from the given initial grid.
    ///
    /// The initial grid counts as generation 0; no stepping happens here.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// The current grid.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of generations advanced so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation and return the new current grid.
    pub fn advance(&mut self) -> &Grid {
        self.current = engine::step(&self.current);
        self.generation += 1;
        trace!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );
        &self.current
    }

    /// Advance `generations` steps, invoking `on_generation` once per
    /// produced generation.
    ///
    /// The observer is called synchronously after each generation is fully
    /// materialized, so generations are observed strictly in order and the
    /// driver never proceeds while an observation is in progress. With
    /// `generations == 0` no stepping occurs and the observer is never
    /// called.
    pub fn run(&mut self, generations: u64, mut on_generation: impl FnMut(&Grid)) {
        for _ in 0..generations {
            self.advance();
            on_generation(&self.current);
        }
        debug!(
            "run complete: {} generations total, population {}",
            self.generation,
            self.current.population()
        );
    }

    /// Consume the driver and take ownership of the final grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
