//! `ralog`: emit records through the release-aware shim.
//!
//! Handy for checking what a given build does with log calls:
//!
//! ```text
//! ralog --tag Net --level error "conn failed: {0}" timeout
//! ```
//!
//! A debug build prints the record; a release build without `always-log`
//! prints nothing.

use std::path::PathBuf;

use clap::Parser;

use ra_logger::config::{load_config, RalogConfig};
use ra_logger::{observability, BuildMode, Current, LogType, ReleaseAwareLogHandler, TaggedLogger};

#[derive(Parser)]
#[command(name = "ralog")]
#[command(about = "Emit a tagged record through the release-aware logger", long_about = None)]
struct Cli {
    /// TOML configuration for the log subscriber.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tag prepended to the record.
    #[arg(short, long, default_value = "ralog")]
    tag: String,

    /// Log type: log, warning, error, assert, exception.
    #[arg(short, long, default_value = "log")]
    level: LogType,

    /// Install the release-aware handler as the process default first.
    #[arg(long)]
    release_aware: bool,

    /// Composite format string, e.g. "loaded {0} in {1} ms".
    format: String,

    /// Format arguments.
    args: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RalogConfig::default(),
    };
    observability::init(&config.logging)?;

    let mode = <Current as BuildMode>::NAME;
    tracing::debug!(mode, "ralog starting");

    if cli.release_aware {
        ReleaseAwareLogHandler::install();
    }

    let logger = TaggedLogger::new(cli.tag);
    let args: Vec<&dyn std::fmt::Display> = cli
        .args
        .iter()
        .map(|a| a as &dyn std::fmt::Display)
        .collect();

    logger.log_type_format(cli.level, &cli.format, &args)?;
    Ok(())
}
