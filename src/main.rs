//! Terminal Game of Life runner (default binary).
//!
//! Interactive mode uses crossterm for input and the framebuffer renderer
//! from `tui_life::term`. `--generations N` runs headless and prints the
//! final grid instead.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_life::core::{Pattern, SimulationConfig, PATTERNS};
use tui_life::input::{handle_key_event, should_quit};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{
    DEFAULT_BIRTH_THRESHOLD, DEFAULT_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS, TICK_MS,
};
use tui_life::{help_entries, Driver};

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-life")]
#[command(about = "Conway's Game of Life on a bounded grid, in the terminal")]
struct Cli {
    /// Grid width in cells (default: fit the terminal)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (default: fit the terminal, two cells per row)
    #[arg(long)]
    height: Option<usize>,

    /// Birth threshold 0..=100; a cell starts alive when its draw exceeds it
    #[arg(long, default_value_t = DEFAULT_BIRTH_THRESHOLD)]
    threshold: u32,

    /// RNG seed for reproducible fills (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL_MS)]
    interval: u32,

    /// Slowest allowed interval in milliseconds
    #[arg(long, default_value_t = MAX_STEP_INTERVAL_MS)]
    max_interval: u32,

    /// Start paused
    #[arg(long, default_value_t = false)]
    paused: bool,

    /// Start from a named pattern instead of a random fill
    #[arg(long)]
    pattern: Option<String>,

    /// Run this many generations without a UI and print the result
    #[arg(long)]
    generations: Option<u64>,

    /// Write logs to this file (interactive mode never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self, fit: (usize, usize)) -> SimulationConfig {
        SimulationConfig {
            width: self.width.unwrap_or(fit.0),
            height: self.height.unwrap_or(fit.1),
            birth_threshold: self.threshold,
            step_interval_ms: self.interval,
            max_interval_ms: self.max_interval,
            start_running: !self.paused,
            ..SimulationConfig::default()
        }
    }

    fn pattern(&self) -> Result<Option<&'static Pattern>> {
        let Some(name) = self.pattern.as_deref() else {
            return Ok(None);
        };
        match Pattern::find(name) {
            Some(p) => Ok(Some(p)),
            None => {
                let known: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
                bail!("unknown pattern '{name}' (known: {})", known.join(", "))
            }
        }
    }

    fn driver(&self, config: &SimulationConfig, seed: u64) -> Result<Driver> {
        match self.pattern()? {
            Some(pattern) => Driver::with_pattern(config, seed, pattern),
            None => Driver::new(config, seed),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let headless = cli.generations.is_some();
    init_tracing(cli.log_file.as_ref(), headless)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "starting tui-life");

    if let Some(generations) = cli.generations {
        return run_headless(&cli, seed, generations);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a subscriber: file when requested, stderr for headless runs,
/// nothing otherwise since the alternate screen owns the terminal.
fn init_tracing(log_file: Option<&PathBuf>, headless: bool) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else if headless {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn run_headless(cli: &Cli, seed: u64, generations: u64) -> Result<()> {
    let defaults = SimulationConfig::default();
    let config = cli.config((defaults.width, defaults.height));
    let mut driver = cli.driver(&config, seed)?;
    driver.run_generations(generations);

    let status = driver.sim().status();
    for row in driver.sim().grid().to_rows() {
        println!("{row}");
    }
    println!(
        "generation {} population {} seed {}",
        status.generation, status.population, seed
    );
    info!(
        generation = status.generation,
        population = status.population,
        "headless run finished"
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli, seed: u64) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let config = cli.config(Viewport::new(w, h).grid_fit());
    let mut driver = cli.driver(&config, seed)?;

    let view = LifeView::default();
    let help = help_entries();
    let mut fb = FrameBuffer::new(w, h);
    let mut viewport = Viewport::new(w, h);
    let mut dirty = true;

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        if dirty {
            let status = driver.sim().status();
            let overlay = driver.show_help().then_some(help.as_slice());
            view.render_into(driver.sim().grid(), &status, overlay, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(generation = driver.sim().generation(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= driver.apply(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick with the real elapsed time; the core never reads the clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            dirty |= driver.tick(elapsed_ms);
        }
    }
}
