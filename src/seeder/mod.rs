//! Random initial-state provider.
//!
//! `RandomSeeder` produces the classic random soup: each cell starts
//! alive with a configurable probability (`density`, default 0.5 — a
//! uniform coin flip per cell), drawn from a seeded [`SimRng`] so the
//! same `(width, height, density, seed)` always produces the identical
//! grid.

use crate::core::{Grid, GridError, SimRng};

/// Builder for random initial grids.
#[derive(Clone, Debug)]
pub struct RandomSeeder {
    density: f64,
}

impl Default for RandomSeeder {
    fn default() -> Self {
        Self { density: 0.5 }
    }
}

impl RandomSeeder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probability that any given cell starts alive.
    pub fn with_density(mut self, density: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&density),
            "density must be in [0.0, 1.0]"
        );
        self.density = density;
        self
    }

    /// The configured live-cell probability.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Produce a random grid of the given dimensions.
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is zero.
    pub fn seed_grid(&self, width: usize, height: usize, seed: u64) -> Result<Grid, GridError> {
        let mut rng = SimRng::new(seed);
        Grid::from_fn(width, height, |_, _| rng.gen_bool(self.density))
    }
}
