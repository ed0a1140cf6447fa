//! Logging setup for the CLI
//!
//! Logs go to stderr so stdout only ever carries command output.

use crate::Result;
use std::io;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Filter used by `--verbose`
const VERBOSE_FILTER: &str = "changelog_extract=debug";

/// Build the log filter: `--verbose` wins, then `RUST_LOG`, then the default
pub fn build_filter(verbose: bool) -> Result<EnvFilter> {
    let filter = if verbose {
        EnvFilter::try_new(VERBOSE_FILTER)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?
    };
    Ok(filter)
}

/// Install the global tracing subscriber
pub fn init_logging(verbose: bool) -> Result<()> {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_filter(verbose)?)
        .with(layer)
        .try_init()?;

    Ok(())
}
