//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Key releases are ignored; terminals that report them would otherwise
/// trigger every action twice.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release || is_ctrl_c(key) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameAction::Rotate),

        // Drop to the floor
        KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Drop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_ctrl_c(key))
}

/// Check if key asks for a new game. Only honoured once the current one is over.
pub fn should_restart(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    const LEFT: Option<GameAction> = Some(GameAction::Move(Direction::Left));
    const RIGHT: Option<GameAction> = Some(GameAction::Move(Direction::Right));

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), LEFT);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), RIGHT);

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('H'))), LEFT);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), LEFT);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), RIGHT);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('d'))), RIGHT);
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('W'), KeyCode::Char('x')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(GameAction::Rotate));
        }
    }

    #[test]
    fn test_drop_keys() {
        for code in [KeyCode::Down, KeyCode::Char(' '), KeyCode::Char('j'), KeyCode::Char('S')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(GameAction::Drop));
        }
    }

    #[test]
    fn test_unmapped_and_released_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(handle_key_event(ctrl_c), None);
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_restart_key() {
        assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(should_restart(KeyEvent::from(KeyCode::Char('R'))));
        assert!(!should_restart(KeyEvent::from(KeyCode::Char('q'))));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('r'))), None);
    }
}
