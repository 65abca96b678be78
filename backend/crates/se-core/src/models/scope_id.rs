use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tenant identifier. Always a non-negative integer.
///
/// The only ways to obtain one are [`ScopeId::new`] and [`FromStr`], so any
/// value reaching the credential layer has already been range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ScopeId(i64);

impl ScopeId {
    #[track_caller]
    pub fn new(value: i64) -> CoreResult<Self> {
        if value < 0 {
            return Err(CoreError::InvalidScope {
                value: value.to_string(),
                message: "scope id must be a non-negative integer".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ScopeId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| CoreError::InvalidScope {
            value: trimmed.to_string(),
            message: "scope id must be an integer".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for ScopeId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScopeId> for i64 {
    fn from(id: ScopeId) -> Self {
        id.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
