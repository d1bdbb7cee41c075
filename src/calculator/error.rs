//! Faults the engine can report while handling an event.

use thiserror::Error;

/// A recoverable engine fault.
///
/// The `Display` text is exactly what the error line shows to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Appending another digit would exceed the display cap.
    #[error("Reached the 20 digit max")]
    DigitOverflow,

    /// The pending divide was applied against a zero entry.
    #[error("ERROR: Division by Zero")]
    DivisionByZero,

    /// The display text could not be read back as a number.
    #[error("Error: Reenter Number.")]
    InvalidDisplay(String),
}
