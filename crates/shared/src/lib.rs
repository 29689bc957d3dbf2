//! Shared types, errors, and configuration for LogoDouman Admin.
//!
//! This crate provides common types used across all other crates:
//! - Currency configuration (the CFA franc default and its display rules)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{CurrencyConfig, SymbolPosition, XOF};
