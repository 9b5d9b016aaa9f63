//! Driver state around the simulation loop.
//!
//! The core never seeds itself, so the driver keeps a seeded `SmallRng`
//! that hands out one seed per reseed. A run started with a fixed seed
//! therefore replays exactly, reseeds included.

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::{Pattern, SimulationConfig, SimulationLoop};
use crate::input::key_legend;
use crate::term::HelpEntry;
use crate::types::LifeAction;

pub struct Driver {
    sim: SimulationLoop,
    seeds: SmallRng,
    birth_threshold: u32,
    last_seed: Option<u32>,
    show_help: bool,
}

impl Driver {
    /// Build a simulation and fill it randomly from `seed`.
    pub fn new(config: &SimulationConfig, seed: u64) -> Result<Self> {
        let mut driver = Self::empty(config, seed)?;
        driver.reseed()?;
        Ok(driver)
    }

    /// Build a simulation starting from `pattern` centered on an empty grid.
    pub fn with_pattern(config: &SimulationConfig, seed: u64, pattern: &Pattern) -> Result<Self> {
        let mut driver = Self::empty(config, seed)?;
        pattern
            .stamp_centered(driver.sim.grid_mut())
            .with_context(|| format!("pattern '{}' does not fit the grid", pattern.name))?;
        info!(pattern = pattern.name, "stamped starting pattern");
        Ok(driver)
    }

    fn empty(config: &SimulationConfig, seed: u64) -> Result<Self> {
        let sim = SimulationLoop::new(config).context("invalid simulation config")?;
        Ok(Self {
            sim,
            seeds: SmallRng::seed_from_u64(seed),
            birth_threshold: config.birth_threshold,
            last_seed: None,
            show_help: false,
        })
    }

    pub fn sim(&self) -> &SimulationLoop {
        &self.sim
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Seed used by the most recent random fill
    pub fn last_seed(&self) -> Option<u32> {
        self.last_seed
    }

    /// Advance the simulation clock. Returns true if a generation was produced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.sim.tick(elapsed_ms)
    }

    /// Apply a control action. Returns whether anything visible changed.
    pub fn apply(&mut self, action: LifeAction) -> Result<bool> {
        match action {
            LifeAction::Reseed => {
                self.reseed()?;
                Ok(true)
            }
            LifeAction::ToggleHelp => {
                self.show_help = !self.show_help;
                Ok(true)
            }
            _ => Ok(self.sim.apply_action(action)),
        }
    }

    /// Run `generations` steps back to back, ignoring the interval.
    pub fn run_generations(&mut self, generations: u64) {
        if self.sim.running() {
            self.sim.toggle_running();
        }
        for _ in 0..generations {
            self.sim.request_manual_step();
            self.sim.tick(0);
        }
    }

    fn reseed(&mut self) -> Result<()> {
        let seed: u32 = self.seeds.gen();
        self.sim
            .reseed(self.birth_threshold, seed)
            .context("reseed failed")?;
        self.last_seed = Some(seed);
        debug!(seed, threshold = self.birth_threshold, "reseeded");
        Ok(())
    }
}

/// Help overlay lines: every action plus quit.
pub fn help_entries() -> Vec<HelpEntry> {
    LifeAction::ALL
        .iter()
        .map(|&action| HelpEntry {
            keys: key_legend(action),
            text: action.describe(),
        })
        .chain(std::iter::once(HelpEntry {
            keys: "Esc / q",
            text: "quit",
        }))
        .collect()
}
