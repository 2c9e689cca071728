//! Internal view models and error types.
//!
//! These types are OUR types - they don't change when the Last.fm payload
//! changes. DTOs get converted into these types by the adapter before
//! rendering.

use crate::nav::Route;

/// Text shown when an entity has no usable wiki summary
pub const NO_DETAILS: &str = "Sorry No Details Found";

/// One entry in a grid/list screen (tag, album, artist or track)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Main label
    pub title: String,
    /// Secondary label (usually the artist)
    pub subtitle: Option<String>,
    /// Best available cover/photo URL
    pub image: Option<String>,
    /// Where selecting this card navigates to
    pub route: Option<Route>,
}

/// Header and body of a detail screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Detail {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    /// Summary with the trailing "Read more" anchor removed
    pub summary: String,
    /// Labelled counters, e.g. ("Listeners", "1,234")
    pub stats: Vec<(String, String)>,
    /// Tag chips, each navigating to its tag screen
    pub tags: Vec<Card>,
    /// Ordered track titles (album screens only)
    pub tracks: Vec<String>,
}

/// Errors raised inside the HTTP client.
///
/// Ordinary failures never leave the client as this type: they are logged
/// and folded into a failed envelope. Only client construction surfaces it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    #[error("Last.fm error {code}: {message}")]
    Upstream { code: u32, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
