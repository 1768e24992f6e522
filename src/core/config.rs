//! Configuration for contract validation

use serde::{Deserialize, Serialize};

use super::error::{OptionsError, OptionsResult};

/// Rules applied by [`OptionContract::validate_with`](super::OptionContract::validate_with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Strike must be strictly above this bound
    pub min_strike: f64,
    /// Accept bid > ask
    pub allow_crossed_quotes: bool,
    /// Upper bound on spread / mid, unchecked when `None`
    pub max_relative_spread: Option<f64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_strike: 0.0,
            allow_crossed_quotes: false,
            max_relative_spread: None,
        }
    }
}

impl ValidationConfig {
    /// Default rules plus a cap on relative spread
    pub fn strict() -> Self {
        Self {
            max_relative_spread: Some(0.5),
            ..Default::default()
        }
    }

    /// Reject bounds that would make checks meaningless
    pub fn check(&self) -> OptionsResult<()> {
        if self.min_strike.is_nan() {
            return Err(OptionsError::config("min_strike must be a number"));
        }
        if let Some(max) = self.max_relative_spread {
            if max.is_nan() || max < 0.0 {
                return Err(OptionsError::config(format!(
                    "max_relative_spread must be >= 0 (got {})",
                    max
                )));
            }
        }
        Ok(())
    }

    /// Crossed quotes tolerated (stale or indicative data)
    pub fn lenient() -> Self {
        Self {
            allow_crossed_quotes: true,
            ..Default::default()
        }
    }
}
