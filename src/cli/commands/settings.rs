//! Config file commands.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::ResultExt;

/// Write a default config file
pub fn cmd_config_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path().ok_or(config::ConfigError::NoConfigDir)?;
    init_at(&path, force)?;
    println!("Wrote default config to {}", path.display());
    println!("Set api_key in the [api] section before browsing.");
    Ok(())
}

fn init_at(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    config::save_to(&Config::default(), path).with_context("Failed to write config")?;
    Ok(())
}

/// Print the effective configuration with the API key masked
pub fn cmd_config_show(config: &Config) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(&masked(config))?);
    Ok(())
}

/// Print the config file location
pub fn cmd_config_path() -> anyhow::Result<()> {
    let path = config::config_path().ok_or(config::ConfigError::NoConfigDir)?;
    println!("{}", path.display());
    Ok(())
}

/// Keys longer than this show their last four characters
const MASK_TAIL_MIN_LEN: usize = 8;

fn masked(config: &Config) -> Config {
    let mut shown = config.clone();
    let key = &config.api.api_key;
    let len = key.chars().count();
    if len > MASK_TAIL_MIN_LEN {
        let tail: String = key.chars().skip(len - 4).collect();
        shown.api.api_key = format!("****{}", tail);
    } else if len > 0 {
        shown.api.api_key = "****".to_string();
    }
    shown
}
