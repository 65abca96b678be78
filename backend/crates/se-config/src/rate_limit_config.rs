use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const RATE_LIMIT_REQUESTS_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const RATE_LIMIT_WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=3_600;

/// Throttle on `GET /scope/guest-token`, shared by every caller of the process
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // 100 credentials a minute
        Self {
            max_requests: 100,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range("max_requests", self.max_requests, &RATE_LIMIT_REQUESTS_RANGE)?;
        check_range("window_secs", self.window_secs, &RATE_LIMIT_WINDOW_SECS_RANGE)
    }
}

#[track_caller]
fn check_range<T>(key: &str, value: T, range: &RangeInclusive<T>) -> ConfigErrorResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::rate_limit(format!(
        "rate_limit.{key} must be {}-{}, got {value}",
        range.start(),
        range.end()
    )))
}
