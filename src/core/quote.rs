//! Quote helpers
//!
//! Bid/ask arithmetic on a contract's two-sided quote.

use super::option::{LongShort, OptionContract};

impl OptionContract {
    /// Mid price from bid/ask
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Bid-ask spread
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Relative spread (spread / mid)
    pub fn relative_spread(&self) -> Option<f64> {
        let mid = self.mid();
        if mid > 0.0 {
            Some(self.spread() / mid)
        } else {
            None
        }
    }

    /// Price paid to open a long (ask) or received to open a short (bid)
    pub fn entry_price(&self) -> f64 {
        match self.long_short {
            LongShort::Long => self.ask,
            LongShort::Short => self.bid,
        }
    }

    /// Bid above ask
    pub fn is_crossed(&self) -> bool {
        self.bid > self.ask
    }
}
