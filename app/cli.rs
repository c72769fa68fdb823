use std::path::PathBuf;

use clap::Parser;

/// Parses session descriptions and prints them back in canonical form.
#[derive(Parser)]
#[command(version, about, long_about)]
pub(crate) struct AppCli {
  #[arg(short, long, value_name = "CONFIG_FILE")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, value_name = "LOG_LEVEL")]
  pub(crate) log_level: Option<String>,
  /// line ending of the printed sdp: crlf or lf
  #[arg(long, value_name = "EOL")]
  pub(crate) eol: Option<String>,
  /// output format: sdp or json
  #[arg(long, value_name = "FORMAT")]
  pub(crate) format: Option<String>,
  /// sdp files to read, stdin when none is given
  #[arg(value_name = "FILE")]
  pub(crate) inputs: Vec<PathBuf>,
}
