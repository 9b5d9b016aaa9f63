//! LifeView: paints a `Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each terminal cell shows two grid rows
//! using half-block glyphs, which keeps cells roughly square on typical
//! terminal fonts. The last terminal row is a status bar.

use crate::core::{Grid, SimulationStatus};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Terminal rows available for the grid (everything but the status bar)
    pub fn board_rows(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Largest grid that fits without cropping, at least 1x1.
    pub fn grid_fit(&self) -> (usize, usize) {
        let width = usize::from(self.width).max(1);
        let height = (usize::from(self.board_rows()) * 2).max(1);
        (width, height)
    }
}

/// One line of the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: &'static str,
    pub text: &'static str,
}

const LIVE: Rgb = Rgb::new(235, 235, 235);
const DEAD: Rgb = Rgb::new(16, 16, 24);

pub struct LifeView {
    live: Rgb,
    dead: Rgb,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            live: LIVE,
            dead: DEAD,
        }
    }
}

impl LifeView {
    /// Allocate a framebuffer and render into it.
    pub fn render(
        &self,
        grid: &Grid,
        status: &SimulationStatus,
        help: Option<&[HelpEntry]>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, help, viewport, &mut fb);
        fb
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    ///
    /// Grids larger than the viewport are cropped at the right and bottom;
    /// smaller ones are centered.
    pub fn render_into(
        &self,
        grid: &Grid,
        status: &SimulationStatus,
        help: Option<&[HelpEntry]>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let cell = Style::new(self.live, self.dead);
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::new(self.live, Rgb::default()).glyph(' '));

        let (gw, gh) = grid.size();
        let cols = gw.min(usize::from(viewport.width));
        let rows = gh.div_ceil(2).min(usize::from(viewport.board_rows()));
        let origin_x = (usize::from(viewport.width) - cols) / 2;
        let origin_y = (usize::from(viewport.board_rows()) - rows) / 2;

        let cells = grid.cells();
        for ty in 0..rows {
            let top = ty * 2;
            for x in 0..cols {
                let upper = cells[top * gw + x];
                let lower = top + 1 < gh && cells[(top + 1) * gw + x];
                fb.set(
                    (origin_x + x) as u16,
                    (origin_y + ty) as u16,
                    cell.glyph(half_block(upper, lower)),
                );
            }
        }

        self.draw_status(fb, status, viewport);

        if let Some(entries) = help {
            self.draw_help(fb, entries, viewport);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, status: &SimulationStatus, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let bar = Style::new(Rgb::new(20, 20, 20), Rgb::new(180, 180, 190));
        fb.fill_row(y, bar.glyph(' '));

        let state = if status.running { "RUNNING" } else { "PAUSED" };
        let x = fb.put_str(1, y, state, bar.bold());
        let text = format!(
            "  gen {}  pop {}  {}ms  {}x{}  F1 help",
            status.generation,
            status.population,
            status.step_interval_ms,
            status.width,
            status.height
        );
        fb.put_str(x, y, &text, bar);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, entries: &[HelpEntry], viewport: Viewport) {
        let key_w = entries.iter().map(|e| e.keys.chars().count()).max().unwrap_or(0);
        let text_w = entries.iter().map(|e| e.text.chars().count()).max().unwrap_or(0);
        let box_w = (key_w + text_w + 6) as u16;
        let box_h = entries.len() as u16 + 4;

        let x0 = viewport.width.saturating_sub(box_w) / 2;
        let y0 = viewport.board_rows().saturating_sub(box_h) / 2;
        let panel = Style::new(Rgb::new(230, 230, 230), Rgb::new(40, 40, 70));

        for dy in 0..box_h {
            for dx in 0..box_w {
                fb.set(x0 + dx, y0 + dy, panel.glyph(' '));
            }
        }
        fb.put_str(x0 + 2, y0 + 1, "Keys", panel.bold());
        for (i, entry) in entries.iter().enumerate() {
            let y = y0 + 3 + i as u16;
            fb.put_str(x0 + 2, y, entry.keys, panel.bold());
            fb.put_str(x0 + 4 + key_w as u16, y, entry.text, panel);
        }
    }
}

/// Glyph for a terminal cell showing an upper and a lower grid cell.
fn half_block(upper: bool, lower: bool) -> char {
    match (upper, lower) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

/// Whether a glyph shows at least one live cell.
pub fn glyph_is_live(glyph: Glyph) -> bool {
    matches!(glyph.ch, '█' | '▀' | '▄')
}
