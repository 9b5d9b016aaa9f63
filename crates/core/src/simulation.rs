//! Simulation loop - timing and stepping policy
//!
//! The loop owns the current grid plus a back buffer. A generation is
//! computed into the back buffer and the two are swapped, so the grid a
//! renderer reads is always a complete generation.
//!
//! The loop never reads a clock: the driver passes elapsed milliseconds into
//! [`SimulationLoop::tick`] once per frame.
//!
//! # States
//!
//! - **Running**: a generation is produced whenever the accumulated time
//!   reaches the step interval.
//! - **Paused**: time accumulates but nothing steps, except for a pending
//!   one-shot manual step.

use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::rng::randomize;
use crate::rules::step_into;
use crate::types::{
    LifeAction, DEFAULT_STEP_INTERVAL_MS, INTERVAL_STEP_MS, MAX_STEP_INTERVAL_MS,
};

/// Read-only summary for status bars and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimulationStatus {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub step_interval_ms: u32,
}

#[derive(Debug, Clone)]
pub struct SimulationLoop {
    current: Grid,
    back: Grid,
    running: bool,
    step_interval_ms: u32,
    elapsed_since_step_ms: u32,
    manual_step_pending: bool,
    max_interval_ms: u32,
    interval_step_ms: u32,
    generation: u64,
}

impl SimulationLoop {
    /// Build a loop over an all-dead grid described by `config`.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let mut sim = Self::from_grid(grid);
        sim.max_interval_ms = config.max_interval_ms;
        sim.interval_step_ms = config.interval_step_ms;
        sim.running = config.start_running;
        sim.set_interval(config.step_interval_ms);
        Ok(sim)
    }

    /// Wrap an existing grid with default timing, paused.
    pub fn from_grid(grid: Grid) -> Self {
        let back = grid.clone();
        Self {
            current: grid,
            back,
            running: false,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            elapsed_since_step_ms: 0,
            manual_step_pending: false,
            max_interval_ms: MAX_STEP_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            generation: 0,
        }
    }

    /// The current generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Direct access for explicit cell writes (pattern stamping, editing)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    pub fn max_interval_ms(&self) -> u32 {
        self.max_interval_ms
    }

    pub fn elapsed_since_step_ms(&self) -> u32 {
        self.elapsed_since_step_ms
    }

    pub fn manual_step_pending(&self) -> bool {
        self.manual_step_pending
    }

    /// Generations produced since construction, reseed or clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> SimulationStatus {
        let (width, height) = self.current.size();
        SimulationStatus {
            width,
            height,
            generation: self.generation,
            population: self.current.population(),
            running: self.running,
            step_interval_ms: self.step_interval_ms,
        }
    }

    /// Advance the clock by `elapsed_ms`. Returns true if a generation was produced.
    ///
    /// A pending manual step always wins and consumes the pulse. Otherwise,
    /// while running, a generation is produced once the accumulated time
    /// reaches the interval and the accumulator restarts from zero.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.manual_step_pending {
            self.manual_step_pending = false;
            self.advance();
            return true;
        }

        let total = self.elapsed_since_step_ms.saturating_add(elapsed_ms);
        if self.running && total >= self.step_interval_ms {
            self.elapsed_since_step_ms = 0;
            self.advance();
            return true;
        }

        self.elapsed_since_step_ms = total;
        false
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        debug!(running = self.running, "toggled running");
    }

    /// Queue one generation for the next tick. Only honored while paused.
    ///
    /// Returns whether the pulse was set.
    pub fn request_manual_step(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.manual_step_pending = true;
        true
    }

    /// Set the step interval, clamped to `[0, max_interval_ms]`.
    pub fn set_interval(&mut self, ms: u32) {
        let clamped = ms.min(self.max_interval_ms);
        if clamped != ms {
            debug!(requested = ms, clamped, "step interval clamped");
        }
        self.step_interval_ms = clamped;
    }

    /// Shorten the interval by one increment.
    pub fn speed_up(&mut self) {
        self.set_interval(self.step_interval_ms.saturating_sub(self.interval_step_ms));
    }

    /// Lengthen the interval by one increment.
    pub fn slow_down(&mut self) {
        self.set_interval(self.step_interval_ms.saturating_add(self.interval_step_ms));
    }

    /// Replace the grid with a fresh random fill of the same size.
    ///
    /// On an invalid threshold the current grid is left as it was.
    pub fn reseed(&mut self, birth_threshold: u32, seed: u32) -> Result<()> {
        randomize(&mut self.current, birth_threshold, seed)?;
        self.elapsed_since_step_ms = 0;
        self.generation = 0;
        Ok(())
    }

    /// Kill every cell, reset the generation counter and pause.
    pub fn clear(&mut self) {
        self.current.clear();
        self.running = false;
        self.manual_step_pending = false;
        self.elapsed_since_step_ms = 0;
        self.generation = 0;
        debug!("cleared grid");
    }

    /// Apply the engine-side effect of a control action.
    ///
    /// `Step` pauses a running simulation and otherwise queues a manual
    /// step. `Reseed` and `ToggleHelp` need driver state (seeds, overlay)
    /// and are ignored here. Returns whether anything changed.
    pub fn apply_action(&mut self, action: LifeAction) -> bool {
        match action {
            LifeAction::ToggleRunning => {
                self.toggle_running();
                true
            }
            LifeAction::Step => {
                if self.running {
                    self.toggle_running();
                    true
                } else {
                    self.request_manual_step()
                }
            }
            LifeAction::SpeedUp => {
                let before = self.step_interval_ms;
                self.speed_up();
                before != self.step_interval_ms
            }
            LifeAction::SlowDown => {
                let before = self.step_interval_ms;
                self.slow_down();
                before != self.step_interval_ms
            }
            LifeAction::Clear => {
                self.clear();
                true
            }
            LifeAction::Reseed | LifeAction::ToggleHelp => false,
        }
    }

    fn advance(&mut self) {
        step_into(&self.current, &mut self.back);
        std::mem::swap(&mut self.current, &mut self.back);
        self.generation += 1;
        trace!(generation = self.generation, "generation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> SimulationLoop {
        let grid = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
        SimulationLoop::from_grid(grid)
    }

    #[test]
    fn test_running_steps_on_interval() {
        let mut sim = blinker();
        sim.toggle_running();
        sim.set_interval(100);

        assert!(!sim.tick(40));
        assert!(!sim.tick(40));
        assert_eq!(sim.elapsed_since_step_ms(), 80);
        assert!(sim.tick(20));
        assert_eq!(sim.elapsed_since_step_ms(), 0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_overshoot_does_not_carry_over() {
        let mut sim = blinker();
        sim.toggle_running();
        sim.set_interval(100);

        assert!(sim.tick(250));
        assert_eq!(sim.elapsed_since_step_ms(), 0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_zero_interval_steps_every_tick() {
        let mut sim = blinker();
        sim.toggle_running();
        sim.set_interval(0);
        assert!(sim.tick(0));
        assert!(sim.tick(0));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_manual_step_only_while_paused() {
        let mut sim = blinker();
        assert!(sim.request_manual_step());
        assert!(sim.manual_step_pending());
        assert!(sim.tick(0));
        assert!(!sim.manual_step_pending());
        assert!(!sim.tick(10_000));
        assert_eq!(sim.generation(), 1);

        sim.toggle_running();
        assert!(!sim.request_manual_step());
        assert!(!sim.manual_step_pending());
    }

    #[test]
    fn test_manual_step_leaves_accumulator_alone() {
        let mut sim = blinker();
        sim.set_interval(100);
        assert!(!sim.tick(60));
        sim.request_manual_step();
        assert!(sim.tick(30));
        assert_eq!(sim.elapsed_since_step_ms(), 60);
    }

    #[test]
    fn test_manual_pulse_survives_resume() {
        let mut sim = blinker();
        sim.set_interval(1000);
        sim.request_manual_step();
        sim.toggle_running();
        // Pulse still fires on the next tick even though interval not reached.
        assert!(sim.tick(1));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_set_interval_clamps() {
        let mut sim = blinker();
        sim.set_interval(10_000);
        assert_eq!(sim.step_interval_ms(), MAX_STEP_INTERVAL_MS);
        sim.set_interval(0);
        assert_eq!(sim.step_interval_ms(), 0);
    }

    #[test]
    fn test_speed_controls_walk_the_range() {
        let mut sim = blinker();
        sim.set_interval(50);
        sim.speed_up();
        assert_eq!(sim.step_interval_ms(), 0);
        sim.speed_up();
        assert_eq!(sim.step_interval_ms(), 0);

        sim.set_interval(MAX_STEP_INTERVAL_MS - 10);
        sim.slow_down();
        assert_eq!(sim.step_interval_ms(), MAX_STEP_INTERVAL_MS);
    }

    #[test]
    fn test_step_action_pauses_when_running() {
        let mut sim = blinker();
        sim.toggle_running();
        assert!(sim.apply_action(LifeAction::Step));
        assert!(!sim.running());
        assert!(!sim.manual_step_pending());

        assert!(sim.apply_action(LifeAction::Step));
        assert!(sim.manual_step_pending());
    }

    #[test]
    fn test_driver_actions_are_ignored() {
        let mut sim = blinker();
        let before = sim.grid().clone();
        assert!(!sim.apply_action(LifeAction::Reseed));
        assert!(!sim.apply_action(LifeAction::ToggleHelp));
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_reseed_resets_accumulator_and_generation() {
        let mut sim = blinker();
        sim.request_manual_step();
        sim.tick(0);
        sim.tick(70);
        assert_eq!(sim.elapsed_since_step_ms(), 70);

        sim.reseed(50, 3).unwrap();
        assert_eq!(sim.elapsed_since_step_ms(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().size(), (5, 5));
    }

    #[test]
    fn test_reseed_invalid_threshold_keeps_grid() {
        let mut sim = blinker();
        let before = sim.grid().clone();
        assert!(sim.reseed(101, 3).is_err());
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_clear_pauses_and_empties() {
        let mut sim = blinker();
        sim.toggle_running();
        sim.tick(1000);
        sim.clear();
        assert!(!sim.running());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_new_applies_config() {
        let config = SimulationConfig {
            width: 7,
            height: 3,
            step_interval_ms: 5000,
            start_running: false,
            ..SimulationConfig::default()
        };
        let sim = SimulationLoop::new(&config).unwrap();
        assert_eq!(sim.grid().size(), (7, 3));
        assert!(!sim.running());
        assert_eq!(sim.step_interval_ms(), config.max_interval_ms);
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_status_reflects_state() {
        let sim = blinker();
        let status = sim.status();
        assert_eq!(status.population, 3);
        assert_eq!((status.width, status.height), (5, 5));
        assert!(!status.running);
    }
}
