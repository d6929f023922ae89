// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seeded rectangular-loop maze carving.

use labyrinth_core::math::Prng;
use tracing::{debug, info};

use crate::error::GridError;
use crate::grid::CellGrid;

/// Number of loops carved into a `width × height` grid: `(width + height) / 6`.
pub fn loop_passes(width: u16, height: u16) -> u32 {
    (u32::from(width) + u32::from(height)) / 6
}

/// Generates a grid from a fresh generator seeded with `seed`.
///
/// Same `(width, height, seed)` always produces the same grid.
pub fn generate(width: u16, height: u16, seed: u64) -> Result<CellGrid, GridError> {
    MazeGenerator::new(seed).generate(width, height)
}

/// Carves overlapping rectangular loops of blocked cells into an open grid.
///
/// The result is obstacle geometry, not a solvable maze: loops may overlap,
/// touch, nest or degenerate to a single cell, and nothing guarantees that
/// open regions are connected.
///
/// The generator owns its PRNG. Successive calls on one instance continue the
/// same random stream; use [`generate`] for a one-shot, seed-pure grid.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    seed: u64,
    prng: Prng,
}

impl MazeGenerator {
    /// Creates a generator seeded once with `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed, prng: Prng::from_seed_u64(seed) }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds a `width × height` grid and carves [`loop_passes`] loops into it.
    pub fn generate(&mut self, width: u16, height: u16) -> Result<CellGrid, GridError> {
        let mut grid = CellGrid::open(width, height)?;
        let passes = loop_passes(width, height);
        for _ in 0..passes {
            self.add_random_loop(&mut grid);
        }
        info!(
            width,
            height,
            seed = self.seed,
            passes,
            blocked = grid.blocked_count(),
            "maze generated"
        );
        Ok(grid)
    }

    /// Draws `(xa, xb, ya, yb)` and blocks the perimeter of that rectangle.
    ///
    /// Each corner coordinate is `draw % extent / 2`, with the far corner
    /// offset from the near one, so every loop fits inside the grid.
    fn add_random_loop(&mut self, grid: &mut CellGrid) {
        let xa = self.half_draw(grid.width());
        let xb = self.half_draw(grid.width()) + xa;
        let ya = self.half_draw(grid.height());
        let yb = self.half_draw(grid.height()) + ya;
        debug!(xa, ya, xb, yb, "carving loop");

        for x in xa..=xb {
            grid.block(x, ya);
            grid.block(x, yb);
        }
        for y in ya..=yb {
            grid.block(xa, y);
            grid.block(xb, y);
        }
    }

    fn half_draw(&mut self, extent: u16) -> u16 {
        let draw = self.prng.next_below(u64::from(extent));
        u16::try_from(draw).unwrap_or(0) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grids_get_no_loops() {
        assert_eq!(loop_passes(2, 3), 0);
        let grid = generate(2, 3, 11).unwrap();
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn pass_count_follows_perimeter_formula() {
        assert_eq!(loop_passes(16, 16), 5);
        assert_eq!(loop_passes(32, 32), 10);
        assert_eq!(loop_passes(u16::MAX, u16::MAX), 21_845);
    }

    #[test]
    fn every_pass_blocks_at_least_one_cell() {
        let grid = generate(6, 6, 3).unwrap();
        assert!(grid.blocked_count() >= 1);
    }

    #[test]
    fn degenerate_dimensions_fail_before_drawing() {
        let mut generator = MazeGenerator::new(5);
        assert!(matches!(generator.generate(0, 9), Err(GridError::Degenerate { .. })));
    }
}
