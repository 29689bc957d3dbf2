//! Display strings for amounts stored in cents.

use rust_decimal::{Decimal, RoundingStrategy};

use logodouman_shared::{CurrencyConfig, SymbolPosition, XOF};

use super::conversion::{round_half_up, to_major_units};
use super::number::{GroupedFormatter, NumberFormatter};

/// Francs from which compact display switches to thousands (`K`).
const COMPACT_THOUSAND: i64 = 1_000;

/// Francs from which compact display switches to millions (`M`).
const COMPACT_MILLION: i64 = 1_000_000;

/// Formats cents as a CFA franc amount, e.g. `10000000` -> `"100 000 FCFA"`.
///
/// Without `show_symbol` only the grouped number is returned.
#[must_use]
pub fn format_currency(amount_in_cents: i64, show_symbol: bool) -> String {
    format_currency_with(&XOF, amount_in_cents, show_symbol)
}

/// Formats cents using the given currency configuration.
#[must_use]
pub fn format_currency_with(
    config: &CurrencyConfig,
    amount_in_cents: i64,
    show_symbol: bool,
) -> String {
    let number = GroupedFormatter::from_config(config).format(
        to_major_units(amount_in_cents),
        config.decimal_digits,
        config.decimal_digits,
    );

    if !show_symbol {
        return number;
    }

    match config.symbol_position {
        SymbolPosition::After => format!("{number} {}", config.symbol),
        SymbolPosition::Before => format!("{} {number}", config.symbol),
    }
}

/// Formats cents in abbreviated form for dashboards and tight layouts.
///
/// - at least 1 000 000 francs: one decimal and `M` (`"1.5M FCFA"`)
/// - at least 1 000 francs: rounded thousands and `K` (`"50K FCFA"`)
/// - otherwise: rounded francs (`"500 FCFA"`)
#[must_use]
pub fn format_currency_compact(amount_in_cents: i64) -> String {
    format_currency_compact_with(&XOF, amount_in_cents)
}

/// Compact formatting with the symbol of the given currency.
///
/// Thresholds and the `K`/`M` suffixes are fixed.
#[must_use]
pub fn format_currency_compact_with(config: &CurrencyConfig, amount_in_cents: i64) -> String {
    let amount = to_major_units(amount_in_cents);
    let million = Decimal::from(COMPACT_MILLION);
    let thousand = Decimal::from(COMPACT_THOUSAND);
    let symbol = &config.symbol;

    if amount >= million {
        let mut millions =
            (amount / million).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        millions.rescale(1);
        format!("{millions}M {symbol}")
    } else if amount >= thousand {
        format!("{}K {symbol}", round_half_up(amount / thousand, 0))
    } else {
        format!("{} {symbol}", round_half_up(amount, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::borrow::Cow;

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(format_currency(10_000_000, true), "100 000 FCFA");
        assert_eq!(format_currency(0, true), "0 FCFA");
        assert_eq!(format_currency(99, true), "1 FCFA");
        assert_eq!(format_currency(123_456_789, true), "1 234 568 FCFA");
    }

    #[test]
    fn test_format_currency_without_symbol() {
        assert_eq!(format_currency(10_000_000, false), "100 000");
        assert_eq!(format_currency(50_000, false), "500");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-150_000, true), "-1 500 FCFA");
    }

    #[test]
    fn test_format_currency_symbol_before() {
        let config = CurrencyConfig {
            symbol: Cow::Borrowed("CFA"),
            symbol_position: SymbolPosition::Before,
            ..XOF
        };
        assert_eq!(format_currency_with(&config, 10_000_000, true), "CFA 100 000");
        assert_eq!(format_currency_with(&config, 10_000_000, false), "100 000");
    }

    #[test]
    fn test_format_currency_with_decimal_digits() {
        let config = CurrencyConfig {
            code: Cow::Borrowed("EUR"),
            symbol: Cow::Borrowed("€"),
            decimal_digits: 2,
            ..XOF
        };
        assert_eq!(format_currency_with(&config, 123_456, true), "1 234,56 €");
    }

    #[test]
    fn test_format_currency_follows_configured_locale() {
        let config = CurrencyConfig {
            locale: Cow::Borrowed("en-US"),
            ..XOF
        };
        assert_eq!(format_currency_with(&config, 123_456_789, true), "1,234,568 FCFA");

        let config = CurrencyConfig {
            locale: Cow::Borrowed("de-DE"),
            decimal_digits: 2,
            ..XOF
        };
        assert_eq!(format_currency_with(&config, 123_456_789, false), "1.234.567,89");
    }

    #[test]
    fn test_format_currency_huge_decimal_digits() {
        let config = CurrencyConfig {
            decimal_digits: u32::MAX,
            ..XOF
        };
        let formatted = format_currency_with(&config, 150, false);
        assert_eq!(formatted, format!("1,5{}", "0".repeat(27)));
    }

    #[rstest]
    #[case(150_000_000, "1.5M FCFA")]
    #[case(5_000_000, "50K FCFA")]
    #[case(50_000, "500 FCFA")]
    #[case(0, "0 FCFA")]
    #[case(999, "10 FCFA")]
    #[case(1_000, "10 FCFA")]
    #[case(99_999, "1000 FCFA")]
    #[case(100_000, "1K FCFA")]
    #[case(999_999, "10K FCFA")]
    #[case(1_000_000, "10K FCFA")]
    #[case(99_999_999, "1000K FCFA")]
    #[case(100_000_000, "1.0M FCFA")]
    #[case(104_999_999, "1.0M FCFA")]
    #[case(105_000_000, "1.1M FCFA")]
    #[case(123_456_789_000, "1234.6M FCFA")]
    #[case(-5_000_000, "-50000 FCFA")]
    fn test_format_currency_compact(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(format_currency_compact(cents), expected);
    }

    #[test]
    fn test_format_currency_compact_uses_configured_symbol() {
        let config = CurrencyConfig {
            symbol: Cow::Borrowed("CFA"),
            ..XOF
        };
        assert_eq!(format_currency_compact_with(&config, 150_000_000), "1.5M CFA");
    }

    #[test]
    fn test_format_currency_compact_extremes() {
        assert!(format_currency_compact(i64::MAX).ends_with("M FCFA"));
        assert!(format_currency_compact(i64::MIN).ends_with(" FCFA"));
    }
}
