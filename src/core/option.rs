//! Option contract definitions
//!
//! A single quoted option position: strike, call/put, bid/ask, direction and
//! expiration. The JSON shape matches the records consumed by the UI layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{OptionsError, OptionsResult};

const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = OptionsError;

    fn from_str(s: &str) -> OptionsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(OptionsError::parse(format!("unknown option type '{}'", other))),
        }
    }
}

/// Position direction: whether the contract is held or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongShort {
    Long,
    Short,
}

impl LongShort {
    /// +1 for long, -1 for short
    pub fn sign(&self) -> f64 {
        match self {
            LongShort::Long => 1.0,
            LongShort::Short => -1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            LongShort::Long => LongShort::Short,
            LongShort::Short => LongShort::Long,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LongShort::Long => "long",
            LongShort::Short => "short",
        }
    }
}

impl fmt::Display for LongShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LongShort {
    type Err = OptionsError;

    fn from_str(s: &str) -> OptionsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(LongShort::Long),
            "short" => Ok(LongShort::Short),
            other => Err(OptionsError::parse(format!("unknown position '{}'", other))),
        }
    }
}

/// Option contract with its quote and position direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Strike price
    pub strike_price: f64,
    /// Option type (Call/Put)
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Bid price
    pub bid: f64,
    /// Ask price
    pub ask: f64,
    /// Long or short
    pub long_short: LongShort,
    /// Expiration timestamp (UTC)
    pub expiration_date: DateTime<Utc>,
}

impl OptionContract {
    /// Create a contract without checking any constraint
    pub fn new(
        strike_price: f64,
        option_type: OptionType,
        bid: f64,
        ask: f64,
        long_short: LongShort,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            strike_price,
            option_type,
            bid,
            ask,
            long_short,
            expiration_date,
        }
    }

    /// Create a contract and check it against the default rules
    pub fn try_new(
        strike_price: f64,
        option_type: OptionType,
        bid: f64,
        ask: f64,
        long_short: LongShort,
        expiration_date: DateTime<Utc>,
    ) -> OptionsResult<Self> {
        let contract = Self::new(strike_price, option_type, bid, ask, long_short, expiration_date);
        contract.validate()?;
        Ok(contract)
    }

    pub fn is_call(&self) -> bool {
        self.option_type == OptionType::Call
    }

    pub fn is_long(&self) -> bool {
        self.long_short == LongShort::Long
    }

    /// Time to expiry in years from the given instant (negative once expired)
    pub fn time_to_expiry(&self, from: DateTime<Utc>) -> f64 {
        let seconds = (self.expiration_date - from).num_seconds();
        seconds as f64 / SECONDS_PER_YEAR
    }

    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expiration_date
    }

    /// Is this option in the money?
    pub fn is_itm(&self, spot: f64) -> bool {
        match self.option_type {
            OptionType::Call => spot > self.strike_price,
            OptionType::Put => spot < self.strike_price,
        }
    }

    /// Is this option at the money (within relative tolerance)?
    pub fn is_atm(&self, spot: f64, tolerance: f64) -> bool {
        if spot <= 0.0 {
            return false;
        }
        (self.strike_price - spot).abs() / spot < tolerance
    }

    /// Is this option out of the money?
    pub fn is_otm(&self, spot: f64) -> bool {
        !self.is_itm(spot) && !self.is_atm(spot, 0.01)
    }

    /// Value of the position at expiry, signed by direction
    pub fn payoff_at_expiry(&self, spot: f64) -> f64 {
        self.long_short.sign() * self.option_type.intrinsic(spot, self.strike_price)
    }
}
