//! Core data types for option contracts
//!
//! Defines fundamental types:
//! - OptionContract: strike, type, bid/ask, direction, expiry
//! - OptionType / LongShort: the two closed enumerations
//! - ValidationConfig: opt-in contract checks
//! - OptionsError: error kinds

pub mod config;
pub mod error;
pub mod option;
pub mod quote;
pub mod validation;

pub use config::*;
pub use error::*;
pub use option::*;
pub use validation::*;
