//! Grid module - the cell store
//!
//! The grid is a `width x height` field of boolean cells (true = alive).
//! Uses a flat vector for cache locality; the allocation is made once and
//! reused across generations by the simulation loop.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). There is no wraparound.

use crate::error::{LifeError, Result};

/// Number of cells in a `width x height` grid.
///
/// Zero-sized grids and sizes whose product overflows `usize` are rejected.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(LifeError::InvalidDimension { width, height })
}

/// A bounded Life grid using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Canonical flat index for (x, y)
    ///
    /// Every component addresses cells through this one convention.
    pub fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_range(x, y));
        }
        Ok(y * self.width + x)
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the cell at (x, y) is alive
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set the cell at (x, y)
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Unchecked-by-contract read used by the hot neighbor loop.
    ///
    /// Callers guarantee `x < width && y < height`.
    #[inline(always)]
    pub(crate) fn is_alive(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// All cells in canonical order
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a grid from text rows: `#`/`O`/`*` alive, anything else dead.
    ///
    /// All rows must share the same length.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(LifeError::InvalidDimension { width: len, height });
            }
            for (x, ch) in row.chars().enumerate() {
                grid.cells[y * width + x] = matches!(ch, '#' | 'O' | '*');
            }
        }
        Ok(grid)
    }

    /// Render as text rows (`#` alive, `.` dead)
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&alive| if alive { '#' } else { '.' }).collect())
            .collect()
    }

    fn out_of_range(&self, x: usize, y: usize) -> LifeError {
        LifeError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
