//! musicwiki - browse Last.fm tags, artists and albums from the terminal.
//!
//! Every screen follows one fetch state machine: the API call yields an
//! envelope, the orchestrator turns it into an outcome, and the screen
//! controller folds the outcome into observable screen state that the
//! renderer prints.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod lastfm;
pub mod nav;
pub mod render;
pub mod screen;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG: &str = "musicwiki=warn";
const VERBOSE_LOG: &str = "musicwiki=debug";

/// `RUST_LOG` when set and valid, else [`DEFAULT_LOG`]; `-v` raises the
/// crate to debug on top of either.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG));
    if verbose {
        Ok(filter.add_directive(VERBOSE_LOG.parse()?))
    } else {
        Ok(filter)
    }
}

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so rendered screens stay clean on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref(), args.verbose)?)
        .init();

    cli::run_command(&args)
}
