//! Key bindings: terminal key events to game actions.
//!
//! Letters match case-insensitively. Keys held with Ctrl or Alt are never game
//! input, so Ctrl-C stays free for quitting.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow keys, vi keys and WASD
const BINDINGS: &[(KeyCode, GameAction)] = &[
    (KeyCode::Left, GameAction::MoveLeft),
    (KeyCode::Char('h'), GameAction::MoveLeft),
    (KeyCode::Char('a'), GameAction::MoveLeft),
    (KeyCode::Right, GameAction::MoveRight),
    (KeyCode::Char('l'), GameAction::MoveRight),
    (KeyCode::Char('d'), GameAction::MoveRight),
    (KeyCode::Down, GameAction::SoftDrop),
    (KeyCode::Char('j'), GameAction::SoftDrop),
    (KeyCode::Char('s'), GameAction::SoftDrop),
    (KeyCode::Up, GameAction::RotateCw),
    (KeyCode::Char('k'), GameAction::RotateCw),
    (KeyCode::Char('w'), GameAction::RotateCw),
    (KeyCode::Char('r'), GameAction::Restart),
];

fn normalized(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Action bound to `key`, if any
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let code = normalized(key.code);
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|&(_, action)| action)
}

/// q, Esc or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match normalized(key.code) {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
