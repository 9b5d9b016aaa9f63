//! Well-known starting patterns.
//!
//! Offsets are `(x, y)` relative to the pattern's top-left corner.

use crate::error::{LifeError, Result};
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

impl Pattern {
    /// Look up a pattern by name (case-insensitive)
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box `(width, height)`
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Set the pattern's cells alive with its top-left corner at (x, y).
    ///
    /// Fails without touching the grid if any cell would land off-grid.
    pub fn stamp(&self, grid: &mut Grid, x: usize, y: usize) -> Result<()> {
        let targets = self
            .cells
            .iter()
            .map(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(cx), Some(cy)) => grid.index(cx, cy),
                _ => Err(LifeError::OutOfRange {
                    x: x.saturating_add(dx),
                    y: y.saturating_add(dy),
                    width: grid.width(),
                    height: grid.height(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        let cells = grid.cells_mut();
        for idx in targets {
            cells[idx] = true;
        }
        Ok(())
    }

    /// Stamp the pattern in the middle of the grid.
    pub fn stamp_centered(&self, grid: &mut Grid) -> Result<()> {
        let (w, h) = self.extent();
        let x = grid.width().saturating_sub(w) / 2;
        let y = grid.height().saturating_sub(h) / 2;
        self.stamp(grid, x, y)
    }
}
