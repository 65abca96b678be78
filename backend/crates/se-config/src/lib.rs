mod auth_config;
mod config;
mod embed_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod scope_config;
mod server_config;
mod session_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use embed_config::EmbedConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use scope_config::ScopeConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "SE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".scope-embed";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

const DEFAULT_AUDIENCE: &str = "http://superset:8088/";
const MIN_SECRET_LENGTH: usize = 32;

const DEFAULT_ENGINE_URL: &str = "http://localhost:8088";

const DEFAULT_REMOUNT_DELAY_MS: u64 = 100;
const MAX_REMOUNT_DELAY_MS: u64 = 5_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
