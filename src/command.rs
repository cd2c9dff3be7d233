use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Home,
    End,
    Next,
    Prev,
    ToggleView,
    /// One of the number keys `1` through `9`
    Digit(u8),
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right => Some(Command::Right),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Char(' ') => Some(Command::Space),
            KeyCode::Home => Some(Command::Home),
            KeyCode::End => Some(Command::End),
            KeyCode::Tab => Some(Command::Next),
            KeyCode::BackTab => Some(Command::Prev),
            KeyCode::Char('v' | 'V') => Some(Command::ToggleView),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Command::Digit),
            KeyCode::Char('q' | 'Q') => Some(Command::Q),
            _ => None,
        }
    }

    /// If the command is a movement key, return the corresponding direction
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}
