use std::str::FromStr;

use color_eyre::eyre::{Result, eyre};
use tracing::level_filters::LevelFilter;

/// Parses a configured level name, then raises it by `verbosity` steps.
pub fn level_filter(level: &str, verbosity: u8) -> Result<LevelFilter> {
    let base = LevelFilter::from_str(level)
        .map_err(|_| eyre!("unknown log level `{level}`"))?;
    let raised = match verbosity {
        0 => base,
        1 => base.max(LevelFilter::INFO),
        2 => base.max(LevelFilter::DEBUG),
        _ => LevelFilter::TRACE,
    };
    Ok(raised)
}

/// Diagnostics go to stderr so stdout carries frames only.
pub fn init_tracing(filter: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
