//! Tier 1: weight normalization and stepping.

use proptest::prelude::*;
use tracegraph::{RawWeight, StepDirection, Weight};

#[test]
fn fraction_text_parses_to_unit_fraction() {
    let w = Weight::parse("1/3");
    assert!((w.value() - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(w.to_string(), "1/3");
}

#[test]
fn step_from_one() {
    assert_eq!(Weight::ONE.step(StepDirection::Down), Weight::unit_fraction(2));
    assert_eq!(Weight::unit_fraction(2).step(StepDirection::Up), Weight::ONE);
    assert_eq!(Weight::ONE.step(StepDirection::Up), Weight::integer(2));
}

#[test]
fn invalid_input_normalizes_to_one() {
    for raw in ["", "abc", "-3", "0", "1/0", "NaN"] {
        assert_eq!(Weight::parse(raw), Weight::ONE, "{:?}", raw);
    }
    assert_eq!(Weight::normalize(-2.0), Weight::ONE);
    assert_eq!(Weight::normalize(f64::INFINITY), Weight::ONE);
}

#[test]
fn numbers_round_onto_the_scale() {
    assert_eq!(Weight::normalize(2.4), Weight::integer(2));
    assert_eq!(Weight::normalize(2.6), Weight::integer(3));
    assert_eq!(Weight::normalize(0.3), Weight::unit_fraction(3));
    assert_eq!(Weight::normalize(0.9), Weight::unit_fraction(2));
}

#[test]
fn serde_accepts_numbers_and_text() {
    let w: Weight = serde_json::from_str("\"1/4\"").unwrap();
    assert_eq!(w, Weight::unit_fraction(4));
    let w: Weight = serde_json::from_str("3").unwrap();
    assert_eq!(w, Weight::integer(3));
    assert_eq!(serde_json::to_string(&Weight::unit_fraction(2)).unwrap(), "0.5");
    assert_eq!(RawWeight::from("2").normalize(), Weight::integer(2));
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in 0.0001f64..1000.0) {
        let w = Weight::normalize(raw);
        prop_assert_eq!(Weight::normalize(w.value()), w);
        prop_assert!(w.value() > 0.0);
    }

    #[test]
    fn up_then_down_returns(k in 2u32..50, n in 1u32..50) {
        for w in [Weight::unit_fraction(k), Weight::integer(n)] {
            prop_assert_eq!(w.step(StepDirection::Up).step(StepDirection::Down), w);
            prop_assert!(w.step(StepDirection::Up) > w);
        }
    }
}
