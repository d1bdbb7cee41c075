//! Key scripts for running the calculator without the keypad.
//!
//! A script is a string of key labels such as `"12.5*4="`. Whitespace is
//! ignored. `C` clears and `CE` clears the entry; both are case-insensitive.

use crate::calculator::{Calculator, Digit, Event, Operator, Outcome};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unexpected key '{key}' at position {position}")]
    UnexpectedKey { key: char, position: usize },
}

/// Split a script into keypad events.
pub fn parse(script: &str) -> Result<Vec<Event>, ScriptError> {
    let mut events = Vec::new();
    let mut chars = script.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let event = if let Ok(digit) = Digit::try_from(c) {
            Event::Digit(digit)
        } else if let Some(op) = Operator::from_symbol(c) {
            Event::Operator(op)
        } else {
            match c {
                '.' => Event::DecimalPoint,
                'c' | 'C' => {
                    if chars.next_if(|&(_, n)| n.eq_ignore_ascii_case(&'e')).is_some() {
                        Event::ClearEntry
                    } else {
                        Event::Clear
                    }
                }
                _ => return Err(ScriptError::UnexpectedKey { key: c, position }),
            }
        };
        events.push(event);
    }

    Ok(events)
}

/// The engine state after one scripted event.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub event: Event,
    pub outcome: Outcome,
    pub display: String,
    pub error_message: String,
}

/// Feed `events` to `calc`, recording the visible state after each one.
pub fn run(calc: &mut Calculator, events: &[Event]) -> Vec<Step> {
    events
        .iter()
        .map(|&event| {
            let outcome = calc.handle(event);
            Step {
                event,
                outcome,
                display: calc.display().to_string(),
                error_message: calc.error_message(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> Event {
        Event::Digit(Digit::new(n).unwrap())
    }

    #[test]
    fn test_parse_expression() {
        let events = parse("12.5 * 4 =").unwrap();
        assert_eq!(
            events,
            vec![
                digit(1),
                digit(2),
                Event::DecimalPoint,
                digit(5),
                Event::Operator(Operator::Multiply),
                digit(4),
                Event::Operator(Operator::Equals),
            ]
        );
    }

    #[test]
    fn test_parse_clear_keys() {
        assert_eq!(
            parse("1CE2c3Ce").unwrap(),
            vec![
                digit(1),
                Event::ClearEntry,
                digit(2),
                Event::Clear,
                digit(3),
                Event::ClearEntry,
            ]
        );
        // A lone C followed by something other than E stays a clear
        assert_eq!(parse("C5").unwrap(), vec![Event::Clear, digit(5)]);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert_eq!(
            parse("1 + x"),
            Err(ScriptError::UnexpectedKey {
                key: 'x',
                position: 4
            })
        );
        assert_eq!(
            parse("E").unwrap_err().to_string(),
            "unexpected key 'E' at position 0"
        );
    }

    #[test]
    fn test_run_records_steps() {
        let mut calc = Calculator::new();
        let steps = run(&mut calc, &parse("5/0=").unwrap());

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].display, "5.0");
        assert_eq!(steps[3].display, "0");
        assert_eq!(steps[3].error_message, "ERROR: Division by Zero");
        assert_eq!(calc.accumulator(), 5.0);
    }
}
