//! Locale-aware decimal number formatting.

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};

use logodouman_shared::CurrencyConfig;

/// Largest scale a `Decimal` can carry; fraction digits beyond it are always zero.
const MAX_FRACTION_DIGITS: u32 = 28;

/// Formats a decimal value as a grouped number string.
pub trait NumberFormatter {
    /// Renders `value` with between `min_fraction_digits` and
    /// `max_fraction_digits` digits after the decimal separator.
    fn format(&self, value: Decimal, min_fraction_digits: u32, max_fraction_digits: u32) -> String;
}

/// Groups integer digits by three with configurable separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedFormatter {
    thousand_separator: Cow<'static, str>,
    decimal_separator: Cow<'static, str>,
}

impl GroupedFormatter {
    /// Creates a formatter with explicit separators.
    #[must_use]
    pub fn new(
        thousand_separator: impl Into<Cow<'static, str>>,
        decimal_separator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            thousand_separator: thousand_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    /// Uses the conventions of the currency's locale, with any separator set
    /// explicitly in the configuration taking precedence.
    ///
    /// Unknown locales fall back to the French conventions of the default currency.
    #[must_use]
    pub fn from_config(config: &CurrencyConfig) -> Self {
        let locale = Self::for_locale(&config.locale).unwrap_or_default();
        Self {
            thousand_separator: config
                .thousand_separator
                .clone()
                .unwrap_or(locale.thousand_separator),
            decimal_separator: config
                .decimal_separator
                .clone()
                .unwrap_or(locale.decimal_separator),
        }
    }

    /// Looks up the conventions of a locale by its language subtag.
    ///
    /// Returns `None` for languages without known conventions.
    #[must_use]
    pub fn for_locale(locale: &str) -> Option<Self> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "fr" => Some(Self::new(" ", ",")),
            "en" => Some(Self::new(",", ".")),
            "de" => Some(Self::new(".", ",")),
            _ => None,
        }
    }
}

impl Default for GroupedFormatter {
    fn default() -> Self {
        Self::new(" ", ",")
    }
}

impl NumberFormatter for GroupedFormatter {
    fn format(&self, value: Decimal, min_fraction_digits: u32, max_fraction_digits: u32) -> String {
        let min_fraction_digits = min_fraction_digits.min(MAX_FRACTION_DIGITS);
        let max_fraction_digits = max_fraction_digits
            .min(MAX_FRACTION_DIGITS)
            .max(min_fraction_digits);
        let rounded =
            value.round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut fraction = fraction.trim_end_matches('0').to_string();
        while fraction.len() < min_fraction_digits as usize {
            fraction.push('0');
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(integer, &self.thousand_separator));
        if !fraction.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(&fraction);
        }
        out
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
