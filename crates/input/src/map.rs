//! Key mapping from terminal events to simulation actions.

use crate::types::LifeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation actions.
///
/// Quit keys are not actions; check [`should_quit`] first so that Ctrl-C
/// never reaches the `c` (clear) binding.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    match key.code {
        KeyCode::Char(' ') => Some(LifeAction::ToggleRunning),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => Some(LifeAction::Step),

        // Speed: '+' shortens the interval, '-' lengthens it.
        KeyCode::Char('+') | KeyCode::Char('=') => Some(LifeAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(LifeAction::SlowDown),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Reseed),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),
        KeyCode::F(1) | KeyCode::Char('?') => Some(LifeAction::ToggleHelp),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Key legend shown by the help overlay, in [`LifeAction::ALL`] order.
pub fn key_legend(action: LifeAction) -> &'static str {
    match action {
        LifeAction::ToggleRunning => "Space",
        LifeAction::Step => "Right / n",
        LifeAction::SpeedUp => "+",
        LifeAction::SlowDown => "-",
        LifeAction::Reseed => "r",
        LifeAction::Clear => "c",
        LifeAction::ToggleHelp => "F1 / ?",
    }
}
