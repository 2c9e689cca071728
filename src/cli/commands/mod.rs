//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `browse`: screens (tag list, tag, artist, album, raw routes)
//! - `settings`: config file management

mod browse;
mod settings;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::error::Error;
use crate::nav::Route;

pub use browse::{cmd_open, cmd_tag, cmd_tags};
pub use settings::{cmd_config_init, cmd_config_path, cmd_config_show};

/// Browse Last.fm tags, artists and albums
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Last.fm API key (overrides the config file)
    #[arg(long, global = true, env = "LASTFM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API root, e.g. https://ws.audioscrobbler.com (overrides the config file)
    #[arg(long, global = true, env = "MUSICWIKI_BASE_URL")]
    pub base_url: Option<String>,

    /// Attempts per screen before showing an error (overrides the config file)
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Retry screens that still failed after their attempts once more
    #[arg(long, global = true)]
    pub retry_failed: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the top tags (home screen)
    Tags {
        /// Show every tag instead of the first few
        #[arg(long)]
        expanded: bool,
    },
    /// Show a tag with its top albums, artists and tracks
    Tag {
        /// Tag name
        name: String,
        /// Only load one section of the tag screen
        #[arg(long, value_enum, default_value_t = TagSection::All)]
        section: TagSection,
    },
    /// Show an artist with top tracks and albums
    Artist {
        /// Artist name
        name: String,
    },
    /// Show an album with its track listing
    Album {
        /// Artist name
        artist: String,
        /// Album title
        album: String,
    },
    /// Open a route as printed next to list entries, e.g. `tag/rock`
    Open {
        route: String,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sections of the tag screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagSection {
    All,
    Info,
    Albums,
    Artists,
    Tracks,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

impl Cli {
    /// Config file settings with command-line overrides applied
    pub fn settings(&self) -> Config {
        self.apply_overrides(config::load())
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(key) = &self.api_key {
            config.api.api_key = key.clone();
        }
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(retries) = self.retries {
            config.retry.max_attempts = retries;
        }
        config
    }
}

/// Run the specified CLI command.
///
/// No subcommand shows the tag list.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = cli.settings();
    let retry = cli.retry_failed;

    match &cli.command {
        Some(Commands::Tags { expanded }) => cmd_tags(&rt, &config, *expanded, retry),
        Some(Commands::Tag { name, section }) => cmd_tag(&rt, &config, name, *section, retry),
        Some(Commands::Artist { name }) => cmd_open(
            &rt,
            &config,
            &Route::ArtistDetail {
                artist: name.clone(),
            },
            retry,
        ),
        Some(Commands::Album { artist, album }) => cmd_open(
            &rt,
            &config,
            &Route::AlbumDetail {
                artist: artist.clone(),
                album: album.clone(),
            },
            retry,
        ),
        Some(Commands::Open { route }) => {
            let route: Route = route.parse().map_err(Error::from)?;
            cmd_open(&rt, &config, &route, retry)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force } => cmd_config_init(*force),
            ConfigAction::Show => cmd_config_show(&config),
            ConfigAction::Path => cmd_config_path(),
        },
        None => cmd_tags(&rt, &config, false, retry),
    }
}
