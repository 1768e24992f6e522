//! Error types for option contract data

use std::fmt;

use thiserror::Error;

/// Field of an [`OptionContract`](super::OptionContract), named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    StrikePrice,
    OptionType,
    Bid,
    Ask,
    LongShort,
    ExpirationDate,
}

impl ContractField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractField::StrikePrice => "strike_price",
            ContractField::OptionType => "type",
            ContractField::Bid => "bid",
            ContractField::Ask => "ask",
            ContractField::LongShort => "long_short",
            ContractField::ExpirationDate => "expiration_date",
        }
    }
}

impl fmt::Display for ContractField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Invalid contract: {field} {constraint}")]
    InvalidContract {
        field: ContractField,
        constraint: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type OptionsResult<T> = Result<T, OptionsError>;

impl OptionsError {
    pub fn invalid_contract(field: ContractField, constraint: impl Into<String>) -> Self {
        Self::InvalidContract {
            field,
            constraint: constraint.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Field that failed, for `InvalidContract`
    pub fn field(&self) -> Option<ContractField> {
        match self {
            Self::InvalidContract { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_contract_message() {
        let err = OptionsError::invalid_contract(ContractField::Ask, "must be >= bid (10 < 12)");
        assert_eq!(err.to_string(), "Invalid contract: ask must be >= bid (10 < 12)");
        assert_eq!(err.field(), Some(ContractField::Ask));
        assert_eq!(OptionsError::parse("x").field(), None);
    }
}
