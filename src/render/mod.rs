//! Text rendering of grids.
//!
//! The core never renders; an observer passed to
//! [`Simulation::run`](crate::driver::Simulation::run) does. This module
//! provides the reference observer backend: an ASCII renderer that turns
//! a grid into one text frame, one line per row. Pacing, color maps, and
//! window lifecycles are deliberately out of scope.

use std::fmt::Write as _;

use crate::core::Grid;

/// Renders grids as ASCII frames.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    alive: char,
    dead: char,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph used for live cells.
    pub fn with_alive_glyph(mut self, glyph: char) -> Self {
        self.alive = glyph;
        self
    }

    /// Set the glyph used for dead cells.
    pub fn with_dead_glyph(mut self, glyph: char) -> Self {
        self.dead = glyph;
        self
    }

    /// Render a grid as `height` lines of `width` glyphs, each line
    /// terminated by `\n`.
    #[must_use]
    pub fn render(&self, grid: &Grid) -> String {
        let (width, height) = grid.dimensions();
        let mut frame = String::with_capacity((width + 1) * height);

        for row in grid.cells().chunks(width) {
            for &alive in row {
                let _ = frame.write_char(if alive { self.alive } else { self.dead });
            }
            let _ = frame.write_char('\n');
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let grid = Grid::dead(4, 3).unwrap();
        let frame = AsciiRenderer::new().render(&grid);

        let lines: Vec<_> = frame.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.len() == 4));
    }

    #[test]
    fn test_render_glyph_placement() {
        let grid = Grid::from_fn(3, 2, |row, col| (row, col) == (1, 0)).unwrap();
        let frame = AsciiRenderer::new().render(&grid);

        assert_eq!(frame, "...\n#..\n");
    }

    #[test]
    fn test_custom_glyphs() {
        let grid = Grid::from_fn(2, 1, |_, col| col == 1).unwrap();
        let frame = AsciiRenderer::new()
            .with_alive_glyph('O')
            .with_dead_glyph(' ')
            .render(&grid);

        assert_eq!(frame, " O\n");
    }

    #[test]
    fn test_render_as_run_observer() {
        use crate::driver::Simulation;

        let blinker = Grid::from_fn(5, 5, |row, col| row == 2 && (1..=3).contains(&col)).unwrap();
        let renderer = AsciiRenderer::new();

        let mut frames = Vec::new();
        let mut sim = Simulation::new(blinker);
        sim.run(2, |grid| frames.push(renderer.render(grid)));

        assert_eq!(frames.len(), 2);
        // Generation 1 is the vertical blinker.
        assert_eq!(frames[0], ".....\n..#..\n..#..\n..#..\n.....\n");
        // Generation 2 returns to horizontal.
        assert_eq!(frames[1], ".....\n.....\n.###.\n.....\n.....\n");
    }
}
