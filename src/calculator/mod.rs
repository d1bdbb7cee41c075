//! Calculator engine for the four-function keypad.
//!
//! This module provides functionality to:
//! - Interpret keypad events as a running left-to-right calculation
//! - Render committed results for the display
//! - Copy the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod event;
mod format;
mod operator;

#[cfg(test)]
mod proptests;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, MAX_DIGITS, Mode, Outcome};
pub use error::CalcError;
pub use event::{Digit, Event};
pub use format::decimal_string;
pub use operator::Operator;
