//! Built-in sample contracts
//!
//! Four quotes on one expiry, used for UI prototyping and tests. The set is
//! built once on first access and only ever handed out as a shared slice.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};

use crate::core::{LongShort, OptionContract, OptionType};

/// Expiration shared by every sample contract (RFC 3339)
pub const SAMPLE_EXPIRATION: &str = "2025-12-17T00:00:00Z";

/// `SAMPLE_EXPIRATION` as seconds since the Unix epoch
const SAMPLE_EXPIRATION_SECS: i64 = 1_765_929_600;

static SAMPLE_DATA: LazyLock<Vec<OptionContract>> = LazyLock::new(build_sample_data);

fn sample_expiration() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::seconds(SAMPLE_EXPIRATION_SECS)
}

fn build_sample_data() -> Vec<OptionContract> {
    let expiry = sample_expiration();
    let rows = [
        (100.0, OptionType::Call, 10.05, 12.04, LongShort::Long),
        (102.5, OptionType::Call, 12.1, 14.0, LongShort::Long),
        (103.0, OptionType::Put, 14.0, 15.5, LongShort::Short),
        (105.0, OptionType::Put, 16.0, 18.0, LongShort::Long),
    ];

    let contracts: Vec<OptionContract> = rows
        .into_iter()
        .map(|(strike, option_type, bid, ask, long_short)| {
            OptionContract::new(strike, option_type, bid, ask, long_short, expiry)
        })
        .collect();

    tracing::debug!("Initialized {} sample option contracts", contracts.len());
    contracts
}

/// The sample contracts, in fixed order
pub fn sample_data() -> &'static [OptionContract] {
    SAMPLE_DATA.as_slice()
}
