//! Core logic for LogoDouman Admin.
//!
//! This crate contains pure logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `currency` - Conversion between cents and CFA francs, display formatting
//! - `redirect` - Admin landing view that forwards to the dashboard

pub mod currency;
pub mod redirect;
