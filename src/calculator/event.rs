//! Input events delivered to the engine by a presentation layer.

use super::Operator;

/// A single decimal digit, `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by value.
    pub const ALL: [Digit; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns `None` when `value` is not a single decimal digit.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
            .ok_or(c)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something the user did on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// A number key.
    Digit(Digit),
    /// The `.` key.
    DecimalPoint,
    /// One of `+ - * / =`.
    Operator(Operator),
    /// `C`: reset the whole calculation.
    Clear,
    /// `CE`: reset only the current entry.
    ClearEntry,
}

impl Event {
    /// The keypad label for this event.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
        }
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').map(Digit::as_char), Ok('7'));
        assert_eq!(Digit::try_from('a'), Err('a'));
        // Non-ASCII numerals are not keypad digits
        assert_eq!(Digit::try_from('٣'), Err('٣'));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Event::from(Operator::Divide).label(), "/");
        assert_eq!(Event::ClearEntry.label(), "CE");
        assert_eq!(Event::Digit(Digit::new(4).unwrap()).label(), "4");
    }
}
