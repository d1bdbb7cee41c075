//! The calculator state machine.
//!
//! The engine is driven one event at a time and never fails: faults are kept
//! as the current error and leave the rest of the state as it was, so the user
//! can correct the entry and carry on.

use super::format::decimal_string;
use super::{CalcError, Digit, Event, Operator};
use tracing::{debug, error, warn};

/// Digits allowed on the display without a decimal point.
pub const MAX_DIGITS: usize = 20;

/// Whether the display is being typed into or holds a finished value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The display holds a committed result (or the reset value). The next
    /// digit starts a fresh number.
    #[default]
    First,
    /// Digits append to the display.
    Valid,
}

/// What handling an event did to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The display or mode changed without committing anything.
    Updated,
    /// An operator arrived with no new entry, so it only replaced the pending
    /// operator.
    OperatorReplaced(Operator),
    /// A binary operation was finalized with this result.
    Committed(f64),
    /// The event was refused; the error is now shown.
    Rejected(CalcError),
}

/// The four-function calculator engine.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    error: Option<CalcError>,
    accumulator: f64,
    pending: Operator,
    mode: Mode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create an engine in the reset state.
    pub fn new() -> Self {
        let mut calc = Self {
            display: String::new(),
            error: None,
            accumulator: 0.0,
            pending: Operator::Equals,
            mode: Mode::First,
        };
        calc.reset();
        calc
    }

    /// Dispatch an event to the matching operation.
    pub fn handle(&mut self, event: Event) -> Outcome {
        debug!(?event, display = %self.display, mode = ?self.mode, "handling event");
        match event {
            Event::Digit(digit) => self.enter_digit(digit),
            Event::DecimalPoint => self.enter_decimal_point(),
            Event::Operator(op) => self.apply_operator(op),
            Event::Clear => self.reset(),
            Event::ClearEntry => self.clear_entry(),
        }
    }

    /// Forget everything: `C`.
    pub fn reset(&mut self) -> Outcome {
        self.mode = Mode::First;
        self.accumulator = 0.0;
        self.pending = Operator::Equals;
        self.display = "0".to_string();
        self.error = None;
        Outcome::Updated
    }

    /// Zero the current entry only: `CE`.
    pub fn clear_entry(&mut self) -> Outcome {
        self.display = "0".to_string();
        Outcome::Updated
    }

    pub fn enter_digit(&mut self, digit: Digit) -> Outcome {
        let mut text = if self.mode == Mode::First || self.display == "0" {
            String::new()
        } else {
            self.display.clone()
        };

        let max_len = if text.contains('.') {
            MAX_DIGITS + 1
        } else {
            MAX_DIGITS
        };

        text.push(digit.as_char());
        let outcome = if text.len() <= max_len {
            self.display = text;
            self.error = None;
            Outcome::Updated
        } else {
            self.reject(CalcError::DigitOverflow)
        };

        self.mode = Mode::Valid;
        outcome
    }

    pub fn enter_decimal_point(&mut self) -> Outcome {
        if self.mode == Mode::First {
            self.display = "0".to_string();
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
        self.mode = Mode::Valid;
        Outcome::Updated
    }

    /// Apply the pending operator to the accumulator and the entry, then make
    /// `op` the new pending operator.
    pub fn apply_operator(&mut self, op: Operator) -> Outcome {
        if self.mode == Mode::First {
            self.pending = op;
            return Outcome::OperatorReplaced(op);
        }

        let entered = match self.display.parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                error!(display = %self.display, "display is not a number: {e}");
                return self.reject(CalcError::InvalidDisplay(self.display.clone()));
            }
        };

        match self.pending.apply(self.accumulator, entered) {
            Ok(result) => {
                self.commit(op, result);
                Outcome::Committed(result)
            }
            Err(e) => self.reject(e),
        }
    }

    fn commit(&mut self, op: Operator, result: f64) {
        debug!(pending = %self.pending, next = %op, result, "commit");
        self.mode = Mode::First;
        self.accumulator = result;
        self.pending = op;
        self.display = decimal_string(result);
        self.error = None;
    }

    fn reject(&mut self, fault: CalcError) -> Outcome {
        warn!(%fault, display = %self.display, "event rejected");
        self.error = Some(fault.clone());
        Outcome::Rejected(fault)
    }

    /// The text on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The error line; empty when there is no error.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// The last committed result.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Operator {
        self.pending
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
