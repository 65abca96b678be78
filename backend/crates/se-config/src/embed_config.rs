use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENGINE_URL};

use serde::Deserialize;

/// Where the rendering engine lives and which view is embedded
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Base URL of the rendering engine
    pub engine_url: String,
    /// Engine-side dashboard id used in the embed URL
    pub dashboard_id: String,
    /// Embeddable resource identifier carried in every credential
    pub resource_ref: String,
    pub hide_title: bool,
    pub hide_chart_controls: bool,
    pub hide_tab: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            engine_url: String::from(DEFAULT_ENGINE_URL),
            dashboard_id: String::new(),
            resource_ref: String::new(),
            hide_title: false,
            hide_chart_controls: false,
            hide_tab: false,
        }
    }
}

impl EmbedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.engine_url.starts_with("http://") || self.engine_url.starts_with("https://")) {
            return Err(ConfigError::embed(format!(
                "embed.engine_url must be an http(s) URL, got '{}'",
                self.engine_url
            )));
        }

        if self.dashboard_id.trim().is_empty() {
            return Err(ConfigError::embed(
                "embed.dashboard_id must be set (SE_EMBED_DASHBOARD_ID)",
            ));
        }

        if self.resource_ref.trim().is_empty() {
            return Err(ConfigError::embed(
                "embed.resource_ref must be set (SE_EMBED_RESOURCE_REF)",
            ));
        }

        Ok(())
    }

    /// `{engine_url}/dashboard/{dashboard_id}/embedded`
    pub fn dashboard_url(&self) -> String {
        format!(
            "{}/dashboard/{}/embedded",
            self.engine_url.trim_end_matches('/'),
            self.dashboard_id
        )
    }
}
