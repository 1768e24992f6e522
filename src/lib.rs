//! # Options Data - Option Contract Records
//!
//! Typed option contract records (strike, call/put, bid/ask, long/short,
//! expiration) and a fixed sample set for UI prototyping and tests.
//!
//! ## Usage
//!
//! ```rust
//! use options_data::prelude::*;
//!
//! let contracts = sample_data();
//! assert_eq!(contracts.len(), 4);
//!
//! for contract in contracts {
//!     assert!(contract.validate().is_ok());
//!     println!("{} {} @ {:.2}", contract.long_short, contract.option_type, contract.strike_price);
//! }
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Price options or compute Greeks
//! - Fetch or store market data
//! - Validate contracts unless asked to

pub mod core;
pub mod data;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::core::{
        validate_all, ContractField, LongShort, OptionContract, OptionType, OptionsError,
        OptionsResult, ValidationConfig,
    };

    pub use crate::data::{sample_data, SAMPLE_EXPIRATION};
}

// Re-export main types at crate root
pub use crate::core::{OptionContract, OptionsError, OptionsResult};
pub use crate::data::sample_data;
