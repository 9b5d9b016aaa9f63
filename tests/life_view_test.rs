use tui_life::core::{Grid, SimulationLoop};
use tui_life::help_entries;
use tui_life::term::{glyph_is_live, LifeView, Viewport};

fn render(grid: Grid, viewport: Viewport) -> Vec<String> {
    let sim = SimulationLoop::from_grid(grid);
    LifeView::default()
        .render(sim.grid(), &sim.status(), None, viewport)
        .text_rows()
}

#[test]
fn view_packs_two_grid_rows_per_terminal_row() {
    let grid = Grid::from_rows(&["#.#.", "##..", "....", ".#.."]).unwrap();
    let rows = render(grid, Viewport::new(4, 3));

    assert_eq!(rows[0], "█▄▀ ");
    assert_eq!(rows[1], " ▄  ");
}

#[test]
fn view_centers_small_grids() {
    let grid = Grid::from_rows(&["##", "##"]).unwrap();
    let rows = render(grid, Viewport::new(6, 4));

    // Three board rows, one grid row pair: centered at row 1, cols 2..4.
    assert_eq!(rows[0], "      ");
    assert_eq!(rows[1], "  ██  ");
    assert_eq!(rows[2], "      ");
}

#[test]
fn view_crops_large_grids() {
    let grid = Grid::from_rows(&["#######", "#######", "#######", "#######"]).unwrap();
    let sim = SimulationLoop::from_grid(grid);
    let fb = LifeView::default().render(sim.grid(), &sim.status(), None, Viewport::new(3, 2));

    assert_eq!(fb.width(), 3);
    assert!(fb.row(0).iter().all(|&g| glyph_is_live(g)));
}

#[test]
fn view_odd_height_leaves_lower_half_empty() {
    let grid = Grid::from_rows(&["#", "#", "#"]).unwrap();
    let rows = render(grid, Viewport::new(1, 3));
    assert_eq!(rows[0], "█");
    assert_eq!(rows[1], "▀");
}

#[test]
fn status_bar_reports_state() {
    let grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
    let rows = render(grid, Viewport::new(60, 4));

    let bar = rows.last().unwrap();
    assert!(bar.contains("PAUSED"), "{bar}");
    assert!(bar.contains("gen 0"), "{bar}");
    assert!(bar.contains("pop 3"), "{bar}");
    assert!(bar.contains("3x3"), "{bar}");
}

#[test]
fn help_overlay_lists_keys() {
    let sim = SimulationLoop::from_grid(Grid::new(40, 40).unwrap());
    let help = help_entries();
    let fb = LifeView::default().render(
        sim.grid(),
        &sim.status(),
        Some(help.as_slice()),
        Viewport::new(60, 21),
    );

    let all = fb.text_rows().join("\n");
    assert!(all.contains("Keys"));
    assert!(all.contains("Space"));
    assert!(all.contains("quit"));
}
