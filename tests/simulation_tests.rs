//! Integration tests for the tick-driven simulation loop

use tui_life::core::{step, Grid, SimulationConfig, SimulationLoop};
use tui_life::types::{LifeAction, MAX_STEP_INTERVAL_MS};
use tui_life::Driver;

fn seeded(width: usize, height: usize) -> SimulationLoop {
    let config = SimulationConfig {
        width,
        height,
        start_running: false,
        ..SimulationConfig::default()
    };
    let mut sim = SimulationLoop::new(&config).unwrap();
    sim.reseed(60, 31337).unwrap();
    sim
}

#[test]
fn test_paused_tick_never_mutates_grid() {
    let mut sim = seeded(20, 12);
    let before = sim.grid().clone();

    for elapsed in [0, 1, 16, 250, 10_000, u32::MAX] {
        assert!(!sim.tick(elapsed));
        assert_eq!(sim.grid(), &before);
    }
    assert_eq!(sim.generation(), 0);
}

#[test]
fn test_running_tick_matches_stepper() {
    let mut sim = seeded(20, 12);
    let mut expected = sim.grid().clone();
    sim.toggle_running();
    sim.set_interval(100);

    for _ in 0..5 {
        expected = step(&expected);
        // Four 25ms frames reach the interval exactly.
        assert!(!sim.tick(25));
        assert!(!sim.tick(25));
        assert!(!sim.tick(25));
        assert!(sim.tick(25));
        assert_eq!(sim.grid(), &expected);
    }
    assert_eq!(sim.generation(), 5);
}

#[test]
fn test_manual_step_produces_exactly_one_generation() {
    let mut sim = seeded(10, 10);
    let expected = step(sim.grid());

    assert!(sim.request_manual_step());
    assert!(sim.tick(0));
    assert_eq!(sim.grid(), &expected);

    // Pulse consumed.
    assert!(!sim.tick(5_000));
    assert_eq!(sim.grid(), &expected);
}

#[test]
fn test_toggle_running_flips_state() {
    let mut sim = seeded(4, 4);
    assert!(!sim.running());
    sim.toggle_running();
    assert!(sim.running());
    sim.toggle_running();
    assert!(!sim.running());
}

#[test]
fn test_interval_clamped_to_range() {
    let mut sim = seeded(4, 4);
    sim.set_interval(u32::MAX);
    assert_eq!(sim.step_interval_ms(), MAX_STEP_INTERVAL_MS);
    sim.set_interval(0);
    assert_eq!(sim.step_interval_ms(), 0);
}

#[test]
fn test_reseed_keeps_dimensions_and_is_reproducible() {
    let mut a = seeded(13, 7);
    let mut b = seeded(13, 7);
    a.reseed(50, 9).unwrap();
    b.reseed(50, 9).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.grid().size(), (13, 7));
}

#[test]
fn test_key_driven_session() {
    let config = SimulationConfig {
        width: 16,
        height: 16,
        start_running: true,
        ..SimulationConfig::default()
    };
    let mut driver = Driver::new(&config, 2024).unwrap();

    // Right arrow while running pauses.
    driver.apply(LifeAction::Step).unwrap();
    assert!(!driver.sim().running());

    // Right arrow while paused steps once.
    let expected = step(driver.sim().grid());
    driver.apply(LifeAction::Step).unwrap();
    assert!(driver.tick(0));
    assert_eq!(driver.sim().grid(), &expected);

    // Slower then faster returns to the start interval.
    let interval = driver.sim().step_interval_ms();
    driver.apply(LifeAction::SlowDown).unwrap();
    driver.apply(LifeAction::SpeedUp).unwrap();
    assert_eq!(driver.sim().step_interval_ms(), interval);

    driver.apply(LifeAction::Clear).unwrap();
    assert_eq!(driver.sim().grid().population(), 0);

    driver.apply(LifeAction::Reseed).unwrap();
    assert_eq!(driver.sim().generation(), 0);
    assert_eq!(driver.sim().grid().size(), (16, 16));
}

#[test]
fn test_headless_run_generations() {
    let config = SimulationConfig::with_size(12, 12);
    let mut driver = Driver::new(&config, 5).unwrap();

    let mut expected: Grid = driver.sim().grid().clone();
    for _ in 0..10 {
        expected = step(&expected);
    }

    driver.run_generations(10);
    assert_eq!(driver.sim().generation(), 10);
    assert_eq!(driver.sim().grid(), &expected);
    assert!(!driver.sim().running());
}
