//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_2048::Direction;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Slide the tiles.
    Move(Direction),
    /// Start a new game.
    Restart,
    /// Switch between the light and dark themes.
    ToggleTheme,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
///
/// Arrow keys, WASD and hjkl all move. Key releases and repeats on
/// terminals that report them are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            Some(Action::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            Some(Action::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Some(Action::Move(Direction::Right))
        }
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::Move(Direction::Up)));
        assert_eq!(action_for(press(KeyCode::Down)), Some(Action::Move(Direction::Down)));
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Move(Direction::Left)));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(action_for(press(KeyCode::Char('w'))), Some(Action::Move(Direction::Up)));
        assert_eq!(action_for(press(KeyCode::Char('l'))), Some(Action::Move(Direction::Right)));
        assert_eq!(action_for(press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_theme_toggle_key() {
        assert_eq!(action_for(press(KeyCode::Char('t'))), Some(Action::ToggleTheme));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }
}
