use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{randomize, step, step_into, Grid, SimulationLoop};

fn seeded(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    randomize(&mut grid, 70, 12345).unwrap();
    grid
}

fn bench_step_alloc(c: &mut Criterion) {
    let grid = seeded(256, 256);

    c.bench_function("step_256x256", |b| {
        b.iter(|| step(black_box(&grid)));
    });
}

fn bench_step_into(c: &mut Criterion) {
    let grid = seeded(256, 256);
    let mut next = grid.clone();

    c.bench_function("step_into_256x256", |b| {
        b.iter(|| step_into(black_box(&grid), &mut next));
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut sim = SimulationLoop::from_grid(seeded(200, 100));
    sim.toggle_running();
    sim.set_interval(0);

    c.bench_function("tick_200x100", |b| {
        b.iter(|| sim.tick(black_box(16)));
    });
}

fn bench_randomize(c: &mut Criterion) {
    let mut grid = Grid::new(256, 256).unwrap();

    c.bench_function("randomize_256x256", |b| {
        b.iter(|| randomize(&mut grid, black_box(80), black_box(7)));
    });
}

criterion_group!(
    benches,
    bench_step_alloc,
    bench_step_into,
    bench_tick,
    bench_randomize
);
criterion_main!(benches);
