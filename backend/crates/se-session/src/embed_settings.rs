use crate::{DEFAULT_REMOUNT_DELAY_MS, UiConfig};

use std::time::Duration;

/// Fixed parameters of every mount a controller performs
#[derive(Debug, Clone)]
pub struct EmbedSettings {
    /// Base URL of the rendering engine
    pub engine_url: String,
    /// Embeddable resource the credentials grant access to
    pub resource_ref: String,
    pub ui: UiConfig,
    pub remount_delay: Duration,
}

impl EmbedSettings {
    pub fn new(engine_url: impl Into<String>, resource_ref: impl Into<String>) -> Self {
        Self {
            engine_url: engine_url.into(),
            resource_ref: resource_ref.into(),
            ui: UiConfig::default(),
            remount_delay: Duration::from_millis(DEFAULT_REMOUNT_DELAY_MS),
        }
    }

    pub fn with_ui(mut self, ui: UiConfig) -> Self {
        self.ui = ui;
        self
    }

    pub fn with_remount_delay(mut self, delay: Duration) -> Self {
        self.remount_delay = delay;
        self
    }
}
