//! Terminal rendering for the Life simulation.
//!
//! A small, game-oriented rendering layer: the grid is painted into a
//! framebuffer by a pure view, and the renderer flushes framebuffers to the
//! terminal with per-row diffing.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Paint two grid rows per terminal row for square-looking cells
//! - Redraw only what changed between frames

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use life_view::{glyph_is_live, HelpEntry, LifeView, Viewport};
pub use renderer::{dirty_span, encode_frame_into, TerminalRenderer};
