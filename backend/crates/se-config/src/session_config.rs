use crate::{ConfigError, ConfigErrorResult, DEFAULT_REMOUNT_DELAY_MS, MAX_REMOUNT_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

/// Client-side view lifecycle settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause between clearing the mount target and mounting the next view
    pub remount_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            remount_delay_ms: DEFAULT_REMOUNT_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.remount_delay_ms > MAX_REMOUNT_DELAY_MS {
            return Err(ConfigError::session(format!(
                "session.remount_delay_ms must be 0-{}, got {}",
                MAX_REMOUNT_DELAY_MS, self.remount_delay_ms
            )));
        }
        Ok(())
    }

    pub fn remount_delay(&self) -> Duration {
        Duration::from_millis(self.remount_delay_ms)
    }
}
