//! Rendering of committed results on the display.
//!
//! Results always carry a fractional part (`7.0`, not `7`) and switch to
//! scientific notation outside `[1e-3, 1e7)`, e.g. `1.0E10`. The output is
//! always accepted by `f64::from_str`, so a committed result can be fed back
//! into the next operation.

/// Lower bound (inclusive) of the plain-decimal range.
const PLAIN_MIN: f64 = 1e-3;
/// Upper bound (exclusive) of the plain-decimal range.
const PLAIN_MAX: f64 = 1e7;

/// Format a result for the display.
pub fn decimal_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        with_fraction(format!("{value}"))
    } else {
        scientific(value)
    }
}

/// Append `.0` when the shortest representation has no fractional part.
fn with_fraction(mut text: String) -> String {
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn scientific(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
        }
        None => with_fraction(raw),
    }
}
