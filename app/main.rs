mod cli;
mod config;
mod errors;
mod util;

#[cfg(test)]
mod test;

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use cli::AppCli;
use crate::config::AppConfig;
use errors::AppResult;
use sdp_grammar::session::SessionDescription;
use time::macros::format_description;
use tracing::{self, Dispatch, level_filters::LevelFilter};
use tracing_subscriber::{self, EnvFilter, fmt::time::LocalTime};
use util::{OutputFormat, parse_log_level};

fn init_logger(level: &str) -> AppResult<()> {
    let level = parse_log_level(level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(level).into())
                .with_env_var("SDP_INSPECT_LOG")
                .from_env_lossy(),
        )
        .finish();
    tracing::dispatcher::set_global_default(Dispatch::new(subscriber))?;
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> AppResult<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn render(document: &SessionDescription, config: &AppConfig) -> AppResult<String> {
    match config.format()? {
        OutputFormat::Sdp => Ok(sdp_grammar::print(document, Some(config.eol()?))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)? + "\n"),
    }
}

fn inspect(input: Option<&PathBuf>, config: &AppConfig) -> AppResult<()> {
    let name = input
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_owned());
    let text = read_input(input)?;
    let document = sdp_grammar::parse(&text)?;
    tracing::info!(
        "parsed {}: {} media descriptions",
        name,
        document.media_descriptions.len()
    );
    let output = render(&document, config)?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

fn run(cli_args: AppCli) -> AppResult<bool> {
    let mut config = AppConfig::new(cli_args.config.clone())?;
    config.apply(&cli_args);
    config.validate()?;
    init_logger(&config.logger.level)?;
    tracing::debug!("sdp-inspect is starting with config: {:?}", config);

    let inputs: Vec<Option<&PathBuf>> = if cli_args.inputs.is_empty() {
        vec![None]
    } else {
        cli_args.inputs.iter().map(Some).collect()
    };

    let mut all_ok = true;
    for input in inputs {
        if let Err(err) = inspect(input, &config) {
            tracing::error!(
                "inspect {} failed: {}",
                input
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "<stdin>".to_owned()),
                err
            );
            all_ok = false;
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    match run(AppCli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("sdp-inspect: {}", err);
            ExitCode::FAILURE
        }
    }
}
