//! Conversion between minor units (cents) and major units (francs).
//!
//! CRITICAL: Rounding strategy for whole-franc values:
//! - Round to nearest, halves go toward positive infinity (2.5 -> 3, -2.5 -> -2)
//! - Cents are integers, francs are `Decimal`, never floats

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use logodouman_shared::types::MINOR_UNITS_PER_MAJOR;

/// Converts cents into francs without any loss of precision.
#[must_use]
pub fn to_major_units(amount_in_cents: i64) -> Decimal {
    Decimal::new(amount_in_cents, 2)
}

/// Rounds to `decimal_places`, resolving halves toward positive infinity.
///
/// Never returns a negative zero.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(decimal_places, strategy);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Converts a franc amount typed by a user into cents.
///
/// `amount × 100`, rounded to the nearest integer. Values beyond the `i64`
/// range saturate.
#[must_use]
pub fn parse_currency(amount: Decimal) -> i64 {
    let cents = round_half_up(amount.saturating_mul(Decimal::ONE_HUNDRED), 0);
    cents.to_i64().unwrap_or(if cents.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Converts cents into the whole-franc value shown in editable fields.
#[must_use]
pub fn format_for_input(amount_in_cents: i64) -> i64 {
    let francs = amount_in_cents.div_euclid(MINOR_UNITS_PER_MAJOR);
    let remainder = amount_in_cents.rem_euclid(MINOR_UNITS_PER_MAJOR);
    if remainder * 2 >= MINOR_UNITS_PER_MAJOR {
        francs + 1
    } else {
        francs
    }
}

/// Returns true if `amount` is a usable monetary amount: finite and not negative.
#[must_use]
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

/// Decimal counterpart of [`is_valid_amount`]. A `Decimal` is always finite.
#[must_use]
pub fn is_valid_decimal_amount(amount: Decimal) -> bool {
    amount >= Decimal::ZERO
}
