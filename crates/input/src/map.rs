//! Key mapping from terminal events to game inputs.

use crate::types::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Edge-triggered: acted on once per press
    Press(GameInput),
    /// Level-triggered: the down key, held for fast drop
    SoftDrop,
}

/// Map keyboard input to a game input.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    if should_quit(key) {
        return Some(KeyAction::Press(GameInput::Quit));
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyAction::Press(GameInput::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyAction::Press(GameInput::MoveRight))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyAction::Press(GameInput::Rotate))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyAction::SoftDrop),

        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(KeyAction::Press(GameInput::TogglePause))
        }
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyAction::Press(GameInput::ToggleSound)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// True for the keys that drive fast drop
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')
    )
}
