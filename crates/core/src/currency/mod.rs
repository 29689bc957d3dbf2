//! Conversion and display formatting for monetary amounts.
//!
//! Amounts travel as integer cents and are shown in whole CFA francs.
//! Every function here is pure; configuration is read-only.

pub mod conversion;
pub mod format;
pub mod number;

#[cfg(test)]
mod props;

pub use conversion::{
    format_for_input, is_valid_amount, is_valid_decimal_amount, parse_currency, round_half_up,
    to_major_units,
};
pub use format::{
    format_currency, format_currency_compact, format_currency_compact_with, format_currency_with,
};
pub use number::{GroupedFormatter, NumberFormatter};
