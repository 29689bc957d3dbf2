//! Property-based tests for currency conversion and formatting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{format_for_input, is_valid_amount, parse_currency, to_major_units};
use super::format::{format_currency, format_currency_compact};

/// Strategy to generate whole-franc amounts in cents (multiples of 100).
fn whole_franc_cents() -> impl Strategy<Value = i64> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|francs| francs * 100)
}

/// Strategy to generate non-negative cent amounts up to 100 billion francs.
fn non_negative_cents() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whole-franc amounts survive a trip through an input field.
    #[test]
    fn prop_input_round_trip(cents in whole_franc_cents()) {
        let shown = format_for_input(cents);
        prop_assert_eq!(parse_currency(Decimal::from(shown)), cents);
    }

    /// The input value never drifts more than half a franc from the exact amount.
    #[test]
    fn prop_input_value_is_nearest_franc(cents in any::<i64>()) {
        let exact = to_major_units(cents);
        let shown = Decimal::from(format_for_input(cents));
        prop_assert!((shown - exact).abs() <= Decimal::new(5, 1));
    }

    /// Finite non-negative floats are valid amounts.
    #[test]
    fn prop_non_negative_finite_is_valid(amount in 0.0f64..1e15) {
        prop_assert!(is_valid_amount(amount));
    }

    /// Negative amounts are never valid.
    #[test]
    fn prop_negative_is_invalid(amount in (i32::MIN..0).prop_map(f64::from)) {
        prop_assert!(!is_valid_amount(amount));
    }

    /// The bare number is the symbol form minus the trailing symbol.
    #[test]
    fn prop_symbol_is_suffix(cents in any::<i64>()) {
        let bare = format_currency(cents, false);
        prop_assert_eq!(format_currency(cents, true), format!("{bare} FCFA"));
    }

    /// Grouped output only contains digits and separators.
    #[test]
    fn prop_grouped_output_is_digits_and_spaces(cents in non_negative_cents()) {
        let bare = format_currency(cents, false);
        prop_assert!(bare.chars().all(|c| c.is_ascii_digit() || c == ' '));
        prop_assert!(!bare.starts_with(' '));
    }

    /// Compact buckets follow the 1 000 and 1 000 000 franc thresholds.
    #[test]
    fn prop_compact_bucket_selection(cents in non_negative_cents()) {
        let compact = format_currency_compact(cents);
        let francs = to_major_units(cents);
        if francs >= Decimal::from(1_000_000) {
            prop_assert!(compact.ends_with("M FCFA"), "{} -> {}", cents, compact);
        } else if francs >= Decimal::from(1_000) {
            prop_assert!(compact.ends_with("K FCFA"), "{} -> {}", cents, compact);
        } else {
            prop_assert!(!compact.contains('K') && !compact.contains('M'));
        }
    }
}
