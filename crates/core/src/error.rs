//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised by grid construction, cell access and seeding.
///
/// All of these are caller contract violations. None are transient, so
/// nothing in the core retries or recovers from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Cell coordinate outside the grid
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Zero width or height at construction
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Birth threshold outside `[0, 100]`
    #[error("birth threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u32),
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, LifeError>;
