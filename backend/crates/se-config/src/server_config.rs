use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single browser origin allowed to call the API
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origin: String::from(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if !(self.cors_origin.starts_with("http://") || self.cors_origin.starts_with("https://"))
        {
            return Err(ConfigError::server(format!(
                "server.cors_origin must be an http(s) origin, got '{}'",
                self.cors_origin
            )));
        }

        Ok(())
    }
}
