//! Property-based tests for the calculator engine
//!
//! These tests verify key invariants hold across arbitrary key sequences.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_digit() -> impl Strategy<Value = Digit> {
    (0u8..=9).prop_map(|n| Digit::ALL[usize::from(n)])
}

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Equals),
        Just(Operator::Plus),
        Just(Operator::Minus),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        6 => arb_digit().prop_map(Event::Digit),
        1 => Just(Event::DecimalPoint),
        3 => arb_operator().prop_map(Event::Operator),
        1 => Just(Event::Clear),
        1 => Just(Event::ClearEntry),
    ]
}

fn known_message(message: &str) -> bool {
    message.is_empty()
        || message == CalcError::DigitOverflow.to_string()
        || message == CalcError::DivisionByZero.to_string()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn digits_concatenate_up_to_cap(
        first in 1u8..=9,
        rest in prop::collection::vec(arb_digit(), 0..30),
    ) {
        let mut calc = Calculator::new();
        let mut expected = first.to_string();
        calc.enter_digit(Digit::ALL[usize::from(first)]);
        for d in &rest {
            calc.enter_digit(*d);
            expected.push(d.as_char());
        }
        expected.truncate(MAX_DIGITS);

        prop_assert_eq!(calc.display(), expected.as_str());
        let overflowed = rest.len() + 1 > MAX_DIGITS;
        prop_assert_eq!(calc.error() == Some(&CalcError::DigitOverflow), overflowed);
    }

    #[test]
    fn decimal_point_appears_once(
        before in prop::collection::vec(arb_digit(), 0..5),
        points in 1usize..5,
        after in prop::collection::vec(arb_digit(), 0..5),
    ) {
        let mut calc = Calculator::new();
        for d in before {
            calc.enter_digit(d);
        }
        for _ in 0..points {
            calc.enter_decimal_point();
        }
        for d in after {
            calc.enter_digit(d);
            calc.enter_decimal_point();
        }
        prop_assert_eq!(calc.display().matches('.').count(), 1);
    }

    #[test]
    fn invariants_hold_for_any_sequence(events in prop::collection::vec(arb_event(), 0..60)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.handle(event);

            prop_assert!(calc.display().matches('.').count() <= 1);
            prop_assert!(known_message(&calc.error_message()));
            if calc.mode() == Mode::Valid {
                prop_assert!(calc.display().len() <= MAX_DIGITS + 1);
                prop_assert!(calc.display().parse::<f64>().is_ok());
            }
        }
    }

    #[test]
    fn binary_operations_match_f64(
        a in 1u32..100_000,
        b in 1u32..100_000,
        op in arb_operator(),
    ) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars() {
            calc.enter_digit(Digit::try_from(c).unwrap());
        }
        calc.apply_operator(op);
        for c in b.to_string().chars() {
            calc.enter_digit(Digit::try_from(c).unwrap());
        }
        let outcome = calc.apply_operator(Operator::Equals);

        let expected = op.apply(f64::from(a), f64::from(b)).unwrap();
        prop_assert_eq!(outcome, Outcome::Committed(expected));
        prop_assert_eq!(calc.display(), decimal_string(expected));
        prop_assert_eq!(calc.error(), None);
    }

    #[test]
    fn division_by_zero_changes_nothing_but_the_error(
        a in 1u32..1_000,
        zeros in 1usize..4,
    ) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars() {
            calc.enter_digit(Digit::try_from(c).unwrap());
        }
        calc.apply_operator(Operator::Divide);
        for _ in 0..zeros {
            calc.enter_digit(Digit::ALL[0]);
        }
        let before = (calc.display().to_string(), calc.accumulator(), calc.pending_operator(), calc.mode());

        let outcome = calc.apply_operator(Operator::Plus);

        prop_assert_eq!(outcome, Outcome::Rejected(CalcError::DivisionByZero));
        prop_assert_eq!(
            (calc.display().to_string(), calc.accumulator(), calc.pending_operator(), calc.mode()),
            before
        );
    }
}
