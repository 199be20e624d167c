//! Keyboard mapping from terminal events to UI-agnostic actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    Left,
    Right,
    /// Space: jump, or toggle pause in Snake.
    Action,
    /// Enter.
    Confirm,
    Pause,
    Reset,
    /// Esc: leave the current game.
    Back,
    /// Q or Ctrl+C.
    Quit,
    Other,
}

/// Map a key event. Key releases map to `None`.
pub fn map_key(key: KeyEvent) -> Option<AppInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => AppInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => AppInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => AppInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => AppInput::Right,
        KeyCode::Char(' ') => AppInput::Action,
        KeyCode::Enter => AppInput::Confirm,
        KeyCode::Char('p') | KeyCode::Char('P') => AppInput::Pause,
        KeyCode::Char('r') | KeyCode::Char('R') => AppInput::Reset,
        KeyCode::Esc => AppInput::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
        _ => AppInput::Other,
    };
    Some(input)
}
