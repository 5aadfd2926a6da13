//! Utilitaires partagés

pub mod conversion;
pub mod math;

pub use conversion::{format_symbols_hex, parse_symbols_hex, SymbolPolarity};
pub use math::{bit_errors, bit_error_rate, symbol_differences};
