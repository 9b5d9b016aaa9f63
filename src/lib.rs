//! Terminal Game of Life (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_life::{core, input, term, types}`
//! and hosts the [`driver`], which owns the pieces of state the core leaves
//! to its caller: where seeds come from and whether help is showing.

pub mod driver;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use driver::{help_entries, Driver};
