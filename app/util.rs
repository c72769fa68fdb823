use config::ConfigError;
use sdp_grammar::{CRLF, LF};

use crate::errors::{AppError, AppResult};

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected log level: {}",
            other
        )))),
    }
}

pub(crate) fn parse_eol(eol: &str) -> AppResult<&'static str> {
    match eol.to_lowercase().as_str() {
        "crlf" => Ok(CRLF),
        "lf" => Ok(LF),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected line ending: {}, expect crlf or lf",
            other
        )))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Sdp,
    Json,
}

pub(crate) fn parse_output_format(format: &str) -> AppResult<OutputFormat> {
    match format.to_lowercase().as_str() {
        "sdp" => Ok(OutputFormat::Sdp),
        "json" => Ok(OutputFormat::Json),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected output format: {}, expect sdp or json",
            other
        )))),
    }
}
