//! Generation stepping - the B3/S23 transition rule
//!
//! Every cell of the next generation is computed from the previous grid
//! only. The output always lives in a separate buffer, so no cell ever
//! observes an already-updated neighbor.

use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;

/// Next state of one cell given its current state and live-neighbor count.
///
/// | current | n        | next  |
/// |---------|----------|-------|
/// | alive   | < 2      | dead  |
/// | alive   | 2 or 3   | alive |
/// | alive   | > 3      | dead  |
/// | dead    | 3        | alive |
/// | dead    | other    | dead  |
#[inline(always)]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Produce the next generation as a new grid of the same size.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);
    next
}

/// Write the next generation of `prev` into `next` without allocating.
///
/// `next` is resized to `prev`'s dimensions if they differ; every cell of
/// `next` is overwritten.
pub fn step_into(prev: &Grid, next: &mut Grid) {
    if next.size() != prev.size() {
        *next = prev.clone();
    }

    let width = prev.width();
    let out = next.cells_mut();
    for (idx, cell) in out.iter_mut().enumerate() {
        let (x, y) = (idx % width, idx / width);
        *cell = next_state(prev.is_alive(x, y), count_live_neighbors(prev, x, y));
    }
}
