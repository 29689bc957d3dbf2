//! Common types used across the application.

pub mod money;

pub use money::{CurrencyConfig, MINOR_UNITS_PER_MAJOR, SymbolPosition, XOF};
