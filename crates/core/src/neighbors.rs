//! Moore-neighborhood counting on a bounded grid.
//!
//! Cells beyond the edges are permanently dead; nothing wraps around.

use crate::grid::Grid;

/// The eight Moore-neighborhood offsets `(dx, dy)`
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live neighbors of (x, y), in `0..=8`.
///
/// `(x, y)` itself must lie on the grid; that is the caller's contract and
/// only checked in debug builds. Neighbors that fall off the grid count as
/// dead, so corners see at most 3 and edges at most 5.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    debug_assert!(x < grid.width() && y < grid.height(), "cell ({x}, {y}) off grid");

    let (width, height) = grid.size();
    let mut count = 0u8;
    for &(dx, dy) in &MOORE_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx < width && ny < height && grid.is_alive(nx, ny) {
            count += 1;
        }
    }
    count
}
