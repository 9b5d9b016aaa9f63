//! RNG module - deterministic random seeding
//!
//! Seeding a grid must be reproducible from `(dimensions, threshold, seed)`,
//! so the core carries its own tiny generator instead of reaching for
//! process entropy or a clock. Seeds always come from the caller.

use tracing::debug;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::types::{DRAW_RANGE, MAX_BIRTH_THRESHOLD};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short
    /// periods and would correlate neighboring cells under `% max`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

/// Fill `grid` in canonical index order from `(birth_threshold, seed)`.
///
/// Each cell draws uniformly from `[0, 100)` and is alive iff the draw is
/// strictly greater than `birth_threshold`: 100 leaves everything dead,
/// 0 kills only cells that drew exactly 0.
pub fn randomize(grid: &mut Grid, birth_threshold: u32, seed: u32) -> Result<()> {
    if birth_threshold > MAX_BIRTH_THRESHOLD {
        return Err(LifeError::InvalidThreshold(birth_threshold));
    }

    let mut rng = SimpleRng::new(seed);
    for cell in grid.cells_mut() {
        *cell = rng.next_range(DRAW_RANGE) > birth_threshold;
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        birth_threshold,
        seed,
        population = grid.population(),
        "randomized grid"
    );
    Ok(())
}
