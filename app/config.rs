use std::{env, path::PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::{
    AppCli,
    errors::AppResult,
    util::{OutputFormat, parse_eol, parse_log_level, parse_output_format},
};

#[derive(Debug, Deserialize)]
pub(crate) struct Logger {
    pub(crate) level: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Output {
    pub(crate) eol: String,
    pub(crate) format: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) logger: Logger,
    pub(crate) output: Output,
}

impl AppConfig {
    /// defaults, then the config file, then `SDP_INSPECT_*` environment variables
    pub(crate) fn new(config_path: Option<PathBuf>) -> AppResult<Self> {
        let config_path_composed = config_path
            .or_else(|| env::var("SDP_INSPECT_CONFIG").ok().map(PathBuf::from));
        let mut builder = Config::builder()
            .set_default("logger.level", "info")?
            .set_default("output.eol", "crlf")?
            .set_default("output.format", "sdp")?;
        if let Some(path) = config_path_composed {
            builder = builder.add_source(File::from(path));
        }
        let result = builder
            .add_source(
                Environment::with_prefix("sdp_inspect")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        let config = result.try_deserialize()?;
        Ok(config)
    }

    pub(crate) fn apply(&mut self, cli_args: &AppCli) {
        if let Some(level) = &cli_args.log_level {
            self.logger.level = level.clone();
        }
        if let Some(eol) = &cli_args.eol {
            self.output.eol = eol.clone();
        }
        if let Some(format) = &cli_args.format {
            self.output.format = format.clone();
        }
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        let _ = parse_log_level(&self.logger.level)?;
        let _ = parse_eol(&self.output.eol)?;
        let _ = parse_output_format(&self.output.format)?;
        Ok(())
    }

    pub(crate) fn eol(&self) -> AppResult<&'static str> {
        parse_eol(&self.output.eol)
    }

    pub(crate) fn format(&self) -> AppResult<OutputFormat> {
        parse_output_format(&self.output.format)
    }
}
