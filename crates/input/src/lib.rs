//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::LifeAction`]. The mapping
//! is the only binding layer; the core defines what each action does.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, key_legend, should_quit};
