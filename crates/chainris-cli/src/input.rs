use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Player intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateLeft,
    RotateRight,
    TogglePause,
    Restart,
    Quit,
}

impl PlayerInput {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Self::Quit);
        }
        let input = match key.code {
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Down => Self::SoftDrop,
            KeyCode::Up | KeyCode::Char(' ') => Self::HardDrop,
            KeyCode::Char('z' | 'Z') => Self::RotateLeft,
            KeyCode::Char('x' | 'X') => Self::RotateRight,
            KeyCode::Char('p' | 'P') => Self::TogglePause,
            KeyCode::Char('r' | 'R') => Self::Restart,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(input)
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
        assert_eq!(
            PlayerInput::from_key(&press(KeyCode::Left)),
            Some(PlayerInput::MoveLeft)
        );
        assert_eq!(
            PlayerInput::from_key(&press(KeyCode::Right)),
            Some(PlayerInput::MoveRight)
        );
        assert_eq!(
            PlayerInput::from_key(&press(KeyCode::Down)),
            Some(PlayerInput::SoftDrop)
        );
        assert_eq!(
            PlayerInput::from_key(&press(KeyCode::Up)),
            Some(PlayerInput::HardDrop)
        );
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        for (lower, upper, input) in [
            ('z', 'Z', PlayerInput::RotateLeft),
            ('x', 'X', PlayerInput::RotateRight),
            ('p', 'P', PlayerInput::TogglePause),
            ('r', 'R', PlayerInput::Restart),
            ('q', 'Q', PlayerInput::Quit),
        ] {
            assert_eq!(
                PlayerInput::from_key(&press(KeyCode::Char(lower))),
                Some(input)
            );
            assert_eq!(
                PlayerInput::from_key(&press(KeyCode::Char(upper))),
                Some(input)
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            PlayerInput::from_key(&press(KeyCode::Esc)),
            Some(PlayerInput::Quit)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(PlayerInput::from_key(&ctrl_c), Some(PlayerInput::Quit));
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(PlayerInput::from_key(&ctrl_x), None);
    }

    #[test]
    fn test_release_and_unbound_keys_are_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(PlayerInput::from_key(&release), None);
        assert_eq!(PlayerInput::from_key(&press(KeyCode::Char('a'))), None);
        assert_eq!(PlayerInput::from_key(&press(KeyCode::Enter)), None);
    }
}
