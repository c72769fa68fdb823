use config::ConfigError;
use sdp_grammar::errors::SDPError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("logger error: {0}")]
    LoggerError(#[from] tracing::dispatcher::SetGlobalDefaultError),
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("sdp error: {0}")]
    SDPError(#[from] SDPError),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
