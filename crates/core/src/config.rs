//! Simulation configuration.
//!
//! Defaults carry the classic control constants from `tui-life-types`.
//! Drivers override fields (CLI flags, terminal size) and call
//! [`SimulationConfig::validate`] before building a loop.

use crate::error::{LifeError, Result};
use crate::grid::cell_count;
use crate::types::{
    DEFAULT_BIRTH_THRESHOLD, DEFAULT_STEP_INTERVAL_MS, INTERVAL_STEP_MS, MAX_BIRTH_THRESHOLD,
    MAX_STEP_INTERVAL_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Birth threshold used by reseeding, `0..=100`
    pub birth_threshold: u32,
    /// Initial time between generations while running
    pub step_interval_ms: u32,
    /// Upper clamp for the step interval
    pub max_interval_ms: u32,
    /// Interval change per speed-up / slow-down
    pub interval_step_ms: u32,
    /// Start auto-advancing immediately
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 48,
            birth_threshold: DEFAULT_BIRTH_THRESHOLD,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            max_interval_ms: MAX_STEP_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            start_running: true,
        }
    }
}

impl SimulationConfig {
    /// Default config for a `width x height` grid
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reject configurations the core cannot run.
    ///
    /// An interval above the ceiling is not an error; the loop clamps it.
    pub fn validate(&self) -> Result<()> {
        cell_count(self.width, self.height)?;
        if self.birth_threshold > MAX_BIRTH_THRESHOLD {
            return Err(LifeError::InvalidThreshold(self.birth_threshold));
        }
        Ok(())
    }
}
