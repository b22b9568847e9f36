//! The transition engine: computes the next generation from the current one.
//!
//! ## Rule
//!
//! Standard Conway (B3/S23), evaluated against each cell's state in the
//! *current* grid:
//! - A live cell survives iff it has 2 or 3 live neighbors; fewer is
//!   underpopulation, more is overpopulation, and it dies either way.
//! - A dead cell becomes alive iff it has exactly 3 live neighbors.
//!
//! ## Boundary policy
//!
//! Neighbor counting is edge-clamped, not toroidal: offsets that fall
//! outside the grid are excluded from the count, so border cells see
//! fewer than 8 neighbors and never a wrap-around neighbor. This is a
//! deliberate boundary choice; a toroidal variant would produce
//! different outcomes near the edges.
//!
//! ## Simultaneity
//!
//! `step` reads only the prior grid and writes only a fresh grid, so no
//! cell's update can observe another cell's already-updated state within
//! the same generation.

use crate::core::Grid;

/// Count the live cells among the up-to-8 compass-adjacent neighbors of
/// `(row, col)`, excluding the cell itself.
///
/// Out-of-bounds neighbor positions are simply omitted from the count.
#[must_use]
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (width, height) = grid.dimensions();
    let mut count = 0;

    for d_row in -1i64..=1 {
        for d_col in -1i64..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let n_row = row as i64 + d_row;
            let n_col = col as i64 + d_col;
            if n_row < 0 || n_row >= height as i64 || n_col < 0 || n_col >= width as i64 {
                continue;
            }
            if grid.cell(n_row as usize, n_col as usize) {
                count += 1;
            }
        }
    }

    count
}

/// The B3/S23 rule for a single cell, given its current state and live
/// neighbor count.
fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Underpopulation, overpopulation, or stays dead
    }
}

/// Compute the next-generation grid.
///
/// Pure: the input grid is untouched, and the same input always yields
/// the same output. The result has the same dimensions as the input, so
/// construction cannot fail.
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();

    Grid::from_fn(width, height, |row, col| {
        next_state(grid.cell(row, col), live_neighbors(grid, row, col))
    })
    .expect("dimensions of an existing grid are valid")
}
