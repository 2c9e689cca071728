//! Command-line interface for musicwiki.
//!
//! Each browse command loads the screens behind one route and prints them;
//! the `config` commands manage the TOML config file.

mod commands;

pub use commands::{Cli, run_command};
