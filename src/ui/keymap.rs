//! Keyboard input for the terminal keypad.

use super::keypad::Action;
use crate::calculator::{Digit, Event, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One-line summary of the keyboard bindings.
pub const KEY_HINTS: &str = "0-9 . + - * /  Enter: =  c: C  Bksp: CE  y: copy  q: quit";

/// Translate a key press into a keypad action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => {
            if let Ok(digit) = Digit::try_from(c) {
                return Some(digit.into());
            }
            if let Some(op) = Operator::from_symbol(c) {
                return Some(op.into());
            }
            match c {
                '.' => Some(Event::DecimalPoint.into()),
                'c' | 'C' => Some(Event::Clear.into()),
                'y' | 'Y' => Some(Action::Copy),
                'q' | 'Q' => Some(Action::Quit),
                _ => None,
            }
        }
        KeyCode::Enter => Some(Operator::Equals.into()),
        KeyCode::Backspace | KeyCode::Delete => Some(Event::ClearEntry.into()),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Action> {
        action_for_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_and_operators() {
        assert_eq!(press(KeyCode::Char('7')), Some(Digit::ALL[7].into()));
        assert_eq!(press(KeyCode::Char('*')), Some(Operator::Multiply.into()));
        assert_eq!(press(KeyCode::Char('=')), Some(Operator::Equals.into()));
        assert_eq!(press(KeyCode::Enter), Some(Operator::Equals.into()));
        assert_eq!(press(KeyCode::Char('.')), Some(Event::DecimalPoint.into()));
    }

    #[test]
    fn test_clear_keys() {
        assert_eq!(press(KeyCode::Char('c')), Some(Event::Clear.into()));
        assert_eq!(press(KeyCode::Backspace), Some(Event::ClearEntry.into()));
        assert_eq!(press(KeyCode::Delete), Some(Event::ClearEntry.into()));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(press(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::Tab), None);
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::CONTROL)),
            None
        );
    }
}
