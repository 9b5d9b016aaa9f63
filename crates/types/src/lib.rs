//! Shared types module - constants and control actions
//!
//! This crate defines the vocabulary shared by the simulation core, the input
//! mapping and the terminal front end. It has no dependencies, so any driver
//! (terminal, headless, tests) can speak it.
//!
//! # Timing Constants
//!
//! All timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver poll interval (~60 FPS) |
//! | `DEFAULT_STEP_INTERVAL_MS` | 250 | Time between generations while running |
//! | `INTERVAL_STEP_MS` | 50 | Amount `+`/`-` change the interval by |
//! | `MAX_STEP_INTERVAL_MS` | 1500 | Slowest allowed interval |
//!
//! # Seeding
//!
//! A cell is born during random seeding when a draw in `[0, DRAW_RANGE)` is
//! strictly greater than the birth threshold. The default threshold of 80
//! leaves roughly one cell in five alive.
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{LifeAction, DEFAULT_BIRTH_THRESHOLD, MAX_BIRTH_THRESHOLD};
//!
//! assert_eq!(LifeAction::ALL.len(), 7);
//! assert_eq!(LifeAction::ToggleRunning.describe(), "run / pause");
//!
//! assert!(DEFAULT_BIRTH_THRESHOLD <= MAX_BIRTH_THRESHOLD);
//! ```

/// Driver poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default time between generations while running
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 250;

/// Interval change applied by one speed-up / slow-down action
pub const INTERVAL_STEP_MS: u32 = 50;

/// Upper clamp for the step interval
pub const MAX_STEP_INTERVAL_MS: u32 = 1500;

/// Default birth threshold used for random seeding
pub const DEFAULT_BIRTH_THRESHOLD: u32 = 80;

/// Largest valid birth threshold (produces an all-dead grid)
pub const MAX_BIRTH_THRESHOLD: u32 = 100;

/// Exclusive upper bound of a per-cell seeding draw
pub const DRAW_RANGE: u32 = 100;


/// Control actions a front end can apply to a running simulation
///
/// These are produced by key mapping and consumed by the simulation loop
/// (engine-side effects) and the driver (seeding, help overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeAction {
    /// Flip between running and paused
    ToggleRunning,
    /// Advance one generation while paused; pauses when running
    Step,
    /// Shorten the step interval by one increment
    SpeedUp,
    /// Lengthen the step interval by one increment
    SlowDown,
    /// Replace the grid with a fresh random fill
    Reseed,
    /// Kill every cell and pause
    Clear,
    /// Show or hide the key help overlay
    ToggleHelp,
}

impl LifeAction {
    /// Every action, in help-overlay order
    pub const ALL: [LifeAction; 7] = [
        LifeAction::ToggleRunning,
        LifeAction::Step,
        LifeAction::SpeedUp,
        LifeAction::SlowDown,
        LifeAction::Reseed,
        LifeAction::Clear,
        LifeAction::ToggleHelp,
    ];

    /// Short description for the help overlay
    pub fn describe(&self) -> &'static str {
        match self {
            LifeAction::ToggleRunning => "run / pause",
            LifeAction::Step => "step (pauses if running)",
            LifeAction::SpeedUp => "faster",
            LifeAction::SlowDown => "slower",
            LifeAction::Reseed => "random reseed",
            LifeAction::Clear => "clear grid",
            LifeAction::ToggleHelp => "toggle help",
        }
    }
}
