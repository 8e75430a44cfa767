use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Turn(Direction),
    /// Start a new game; only honored once the current one is over
    Restart,
    /// Switch between the glyph and pixel views of the board
    ToggleView,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, code) => match code {
                KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Turn(Direction::Up)),
                KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Turn(Direction::Down)),
                KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Turn(Direction::Left)),
                KeyCode::Char('d' | 'l') | KeyCode::Right => {
                    Some(Command::Turn(Direction::Right))
                }
                KeyCode::Char('r') => Some(Command::Restart),
                KeyCode::Char('v') => Some(Command::ToggleView),
                KeyCode::Char('q') => Some(Command::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::Restart))]
    #[case(KeyCode::Char('v'), KeyModifiers::NONE, Some(Command::ToggleView))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Up, KeyModifiers::SHIFT, None)]
    #[case(KeyCode::Char('R'), KeyModifiers::SHIFT, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }

    #[rstest]
    #[case(KeyCode::Up, 273)]
    #[case(KeyCode::Down, 274)]
    #[case(KeyCode::Right, 275)]
    #[case(KeyCode::Left, 276)]
    fn arrows_match_numeric_keycodes(#[case] code: KeyCode, #[case] numeric: u32) {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(code, KeyModifiers::NONE)),
            Direction::from_keycode(numeric).map(Command::Turn)
        );
    }
}
