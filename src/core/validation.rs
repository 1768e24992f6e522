//! Contract validation
//!
//! Checks are opt-in: constructing a contract never validates it, and a
//! failing contract is reported, not corrected.

use super::config::ValidationConfig;
use super::error::{ContractField, OptionsError, OptionsResult};
use super::option::OptionContract;

impl OptionContract {
    /// Check against the default rules
    pub fn validate(&self) -> OptionsResult<()> {
        self.validate_with(&ValidationConfig::default())
    }

    /// Check against `config`, returning the first failure
    pub fn validate_with(&self, config: &ValidationConfig) -> OptionsResult<()> {
        let result = self.check(config);
        if let Err(OptionsError::InvalidContract { field, constraint }) = &result {
            tracing::warn!(
                %field,
                %constraint,
                strike = self.strike_price,
                "Invalid option contract"
            );
        }
        result
    }

    fn check(&self, config: &ValidationConfig) -> OptionsResult<()> {
        // A config can raise the strike floor but never lower it below zero
        let min_strike = config.min_strike.max(0.0);
        if !self.strike_price.is_finite() || self.strike_price <= min_strike {
            return Err(OptionsError::invalid_contract(
                ContractField::StrikePrice,
                format!("must be finite and > {} (got {})", min_strike, self.strike_price),
            ));
        }

        if !self.bid.is_finite() || self.bid < 0.0 {
            return Err(OptionsError::invalid_contract(
                ContractField::Bid,
                format!("must be finite and >= 0 (got {})", self.bid),
            ));
        }

        if !self.ask.is_finite() || self.ask < 0.0 {
            return Err(OptionsError::invalid_contract(
                ContractField::Ask,
                format!("must be finite and >= 0 (got {})", self.ask),
            ));
        }

        if self.is_crossed() && !config.allow_crossed_quotes {
            return Err(OptionsError::invalid_contract(
                ContractField::Ask,
                format!("must be >= bid ({} < {})", self.ask, self.bid),
            ));
        }

        if let (Some(max), Some(rel)) = (config.max_relative_spread, self.relative_spread()) {
            // NaN cap fails closed
            if max.is_nan() || rel > max {
                return Err(OptionsError::invalid_contract(
                    ContractField::Ask,
                    format!("relative spread {:.4} exceeds {:.4}", rel, max),
                ));
            }
        }

        Ok(())
    }
}

/// Validate every contract, collecting failures with their position
pub fn validate_all(
    contracts: &[OptionContract],
    config: &ValidationConfig,
) -> Vec<(usize, OptionsError)> {
    contracts
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.validate_with(config).err().map(|e| (i, e)))
        .collect()
}
