//! Currency configuration for display and input of monetary amounts.
//!
//! CRITICAL: Amounts are stored in minor units (cents) as integers.
//! Major units are only ever handled as `rust_decimal::Decimal`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Number of minor units (cents) in one major unit.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Where the currency symbol is placed relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// Symbol precedes the number (`FCFA 100`).
    Before,
    /// Symbol follows the number (`100 FCFA`).
    After,
}

/// Immutable display configuration for a currency.
///
/// Created once at startup and shared read-only by every formatting call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// ISO 4217 currency code (e.g., "XOF").
    pub code: Cow<'static, str>,
    /// Display symbol (e.g., "FCFA").
    pub symbol: Cow<'static, str>,
    /// Human-readable name.
    pub name: Cow<'static, str>,
    /// Formatting locale identifier (e.g., "fr-FR").
    pub locale: Cow<'static, str>,
    /// Number of fraction digits shown for major units.
    pub decimal_digits: u32,
    /// Separator between groups of three integer digits.
    ///
    /// `None` uses the convention of `locale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thousand_separator: Option<Cow<'static, str>>,
    /// Separator between integer and fraction digits.
    ///
    /// `None` uses the convention of `locale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<Cow<'static, str>>,
    /// Symbol placement.
    pub symbol_position: SymbolPosition,
}

/// West African CFA franc, the storefront's only currency.
pub const XOF: CurrencyConfig = CurrencyConfig {
    code: Cow::Borrowed("XOF"),
    symbol: Cow::Borrowed("FCFA"),
    name: Cow::Borrowed("Franc CFA"),
    locale: Cow::Borrowed("fr-FR"),
    decimal_digits: 0,
    thousand_separator: None,
    decimal_separator: None,
    symbol_position: SymbolPosition::After,
};

impl Default for CurrencyConfig {
    fn default() -> Self {
        XOF
    }
}

impl std::fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl std::str::FromStr for SymbolPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(format!("Unknown symbol position: {s}")),
        }
    }
}
