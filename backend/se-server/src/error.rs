use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] se_config::ConfigError),

    #[error("Credential issuer error: {0}")]
    Auth(#[from] se_auth::AuthError),

    #[error("Invalid CORS origin '{origin}'")]
    CorsOrigin { origin: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
