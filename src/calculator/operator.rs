//! Binary operators on the keypad.

use super::CalcError;

/// An operator key.
///
/// `Equals` doubles as the identity operator: when it is pending, the next
/// commit passes the entered value straight through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    #[default]
    Equals,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 5] = [
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Equals,
    ];

    /// The label printed on the key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Look up the operator for a key character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equals),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Combine the accumulator with the entered value.
    ///
    /// `Equals` ignores `lhs` and returns `rhs`. Dividing by zero (either sign)
    /// is rejected instead of producing an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Equals => Ok(rhs),
            Self::Plus => Ok(lhs + rhs),
            Self::Minus => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
