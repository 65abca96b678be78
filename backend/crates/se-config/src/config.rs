use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, EmbedConfig, LoggingConfig, RateLimitConfig, ScopeConfig, ServerConfig,
    SessionConfig,
};

use se_core::{ScopeCatalog, ScopeEntry, ScopeId};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub embed: EmbedConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub scopes: Vec<ScopeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            embed: EmbedConfig::default(),
            session: SessionConfig::default(),
            rate_limit: RateLimitConfig::default(),
            logging: LoggingConfig::default(),
            scopes: ScopeConfig::defaults(),
        }
    }
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SE_CONFIG_DIR env var, else use ./.scope-embed/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply SE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SE_CONFIG_DIR env var > ./.scope-embed/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.embed.validate()?;
        self.session.validate()?;
        self.rate_limit.validate()?;

        let catalog = self.scope_catalog()?;
        if catalog.is_empty() {
            return Err(ConfigError::scope("at least one [[scopes]] entry is required"));
        }

        Ok(())
    }

    /// Build the tenant directory from `[[scopes]]`.
    pub fn scope_catalog(&self) -> ConfigErrorResult<ScopeCatalog> {
        let mut entries = Vec::with_capacity(self.scopes.len());
        for scope in &self.scopes {
            let id = ScopeId::new(scope.id)
                .map_err(|_| ConfigError::scope(format!("scope id {} is negative", scope.id)))?;
            if scope.display_name.trim().is_empty() {
                return Err(ConfigError::scope(format!(
                    "scope {} has an empty display_name",
                    scope.id
                )));
            }
            entries.push(ScopeEntry {
                id,
                display_name: scope.display_name.clone(),
                expected_aggregate: scope.expected_aggregate.clone(),
            });
        }

        ScopeCatalog::new(entries).map_err(|e| ConfigError::scope(e.to_string()))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors origin {})",
            self.server.host, self.server.port, self.server.cors_origin
        );
        info!(
            "  auth: HS256, secret {}, audience {}",
            if self.auth.signing_secret.is_some() {
                "configured"
            } else {
                "MISSING"
            },
            self.auth.audience
        );
        info!(
            "  embed: {} (resource {})",
            self.embed.dashboard_url(),
            self.embed.resource_ref
        );
        info!("  session: remount delay {}ms", self.session.remount_delay_ms);
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!("  scopes: {} configured", self.scopes.len());
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SE_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("SE_SERVER_CORS_ORIGIN", &mut self.server.cors_origin);

        // Auth
        Self::apply_env_option_string("SE_AUTH_SIGNING_SECRET", &mut self.auth.signing_secret);
        Self::apply_env_string("SE_AUTH_AUDIENCE", &mut self.auth.audience);

        // Embed
        Self::apply_env_string("SE_EMBED_ENGINE_URL", &mut self.embed.engine_url);
        Self::apply_env_string("SE_EMBED_DASHBOARD_ID", &mut self.embed.dashboard_id);
        Self::apply_env_string("SE_EMBED_RESOURCE_REF", &mut self.embed.resource_ref);

        // Session
        Self::apply_env_parse(
            "SE_SESSION_REMOUNT_DELAY_MS",
            &mut self.session.remount_delay_ms,
        );

        // Rate limit
        Self::apply_env_parse(
            "SE_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "SE_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("SE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
