//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the Game of Life engine. It has **no dependencies** on
//! the terminal, input handling, or any clock, making it:
//!
//! - **Deterministic**: the same seed and threshold produce the same grid
//! - **Testable**: every rule and timing decision is a plain function call
//! - **Portable**: any front end (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: bounded boolean grid with row-major indexing
//! - [`neighbors`]: Moore-neighborhood counting without wraparound
//! - [`rules`]: the B3/S23 transition and double-buffered stepping
//! - [`rng`]: seeded random fill
//! - [`simulation`]: tick-driven loop with run/pause, manual step and speed
//! - [`patterns`]: a handful of classic starting patterns
//! - [`config`]: validated simulation settings
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Grid, SimulationLoop};
//!
//! let grid = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
//! let mut sim = SimulationLoop::from_grid(grid);
//!
//! // Paused: time passes, nothing changes.
//! assert!(!sim.tick(1_000));
//!
//! // One manual step flips the blinker.
//! sim.request_manual_step();
//! assert!(sim.tick(0));
//! assert_eq!(sim.grid().to_rows()[2], ".###.");
//! ```
//!
//! # Timing
//!
//! Call [`SimulationLoop::tick`](simulation::SimulationLoop::tick) every frame
//! with the elapsed milliseconds. While running, a generation is produced
//! once the accumulated time reaches the step interval.

pub mod config;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod rng;
pub mod rules;
pub mod simulation;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, PATTERNS};
pub use rng::{randomize, SimpleRng};
pub use rules::{next_state, step, step_into};
pub use simulation::{SimulationLoop, SimulationStatus};
