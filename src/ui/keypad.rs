//! Keypad layout and the actions its buttons trigger.
//!
//! The layout follows the classic desktop calculator: a 4x3 number grid, an
//! operator column on the right and a `C CE =` row at the bottom.

use crate::calculator::{Digit, Event, Operator};
use ratatui::layout::Rect;

/// Something the user can ask the keypad to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the engine.
    Calc(Event),
    /// Copy the display to the clipboard.
    Copy,
    /// Leave the program.
    Quit,
}

impl Action {
    /// The label printed on the button for this action.
    pub fn label(&self) -> String {
        match self {
            Self::Calc(event) => event.label(),
            Self::Copy => "COPY".to_string(),
            Self::Quit => "EXIT".to_string(),
        }
    }

    /// Check if this is an operator button.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Calc(Event::Operator(_)))
    }

    /// Check if this is `C`, `CE` or `EXIT`.
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Self::Calc(Event::Clear | Event::ClearEntry) | Self::Quit
        )
    }
}

impl From<Event> for Action {
    fn from(event: Event) -> Self {
        Self::Calc(event)
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Calc(Event::Digit(digit))
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Calc(Event::Operator(op))
    }
}

/// Number grid, row by row.
pub fn number_rows() -> [[Action; 3]; 4] {
    let d = |n: usize| Action::from(Digit::ALL[n]);
    [
        [d(7), d(8), d(9)],
        [d(4), d(5), d(6)],
        [d(1), d(2), d(3)],
        [Action::Calc(Event::DecimalPoint), d(0), Action::Quit],
    ]
}

/// Operator column, top to bottom.
pub fn operator_column() -> [Action; 4] {
    [
        Operator::Plus.into(),
        Operator::Minus.into(),
        Operator::Multiply.into(),
        Operator::Divide.into(),
    ]
}

/// Bottom row.
pub fn clear_row() -> [Action; 3] {
    [
        Action::Calc(Event::Clear),
        Action::Calc(Event::ClearEntry),
        Operator::Equals.into(),
    ]
}

/// Where a button was drawn in the last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonArea {
    pub area: Rect,
    pub action: Action,
}

/// Find the button under a terminal cell.
pub fn hit_test(buttons: &[ButtonArea], column: u16, row: u16) -> Option<Action> {
    buttons
        .iter()
        .find(|b| {
            let a = b.area;
            column >= a.x && column < a.right() && row >= a.y && row < a.bottom()
        })
        .map(|b| b.action)
}
