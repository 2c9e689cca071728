//! Navigation destinations.
//!
//! A [`Route`] names a screen plus the string parameters it needs. Routes
//! have a path form (`tags`, `tag/<name>`, `artist/<name>`,
//! `album/<artist>/<album>`) with percent-encoded segments, so a name
//! containing `/` survives the round trip.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Home screen: the tag grid
    TagList,
    /// Tag summary with albums/artists/tracks tabs
    TagDetail { tag: String },
    /// Artist bio with top tracks and top albums
    ArtistDetail { artist: String },
    /// Album summary with track listing
    AlbumDetail { artist: String, album: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),

    #[error("Route {route} expects {expected} segment(s), got {actual}")]
    Arity {
        route: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid percent-encoding in {0}")]
    Encoding(String),

    #[error("Empty segment in route {0}")]
    EmptySegment(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use urlencoding::encode;
        match self {
            Route::TagList => f.write_str("tags"),
            Route::TagDetail { tag } => write!(f, "tag/{}", encode(tag)),
            Route::ArtistDetail { artist } => write!(f, "artist/{}", encode(artist)),
            Route::AlbumDetail { artist, album } => {
                write!(f, "album/{}/{}", encode(artist), encode(album))
            }
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let mut parts = trimmed.split('/');
        let head = parts.next().unwrap_or_default();
        let segments = parts
            .map(|p| {
                let decoded = urlencoding::decode(p)
                    .map_err(|_| RouteError::Encoding(s.to_string()))?
                    .into_owned();
                if decoded.is_empty() {
                    Err(RouteError::EmptySegment(s.to_string()))
                } else {
                    Ok(decoded)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let arity = |route: &'static str, expected: usize| {
            if segments.len() == expected {
                Ok(())
            } else {
                Err(RouteError::Arity {
                    route,
                    expected,
                    actual: segments.len(),
                })
            }
        };

        match head {
            "" | "tags" => {
                arity("tags", 0)?;
                Ok(Route::TagList)
            }
            "tag" => {
                arity("tag", 1)?;
                Ok(Route::TagDetail {
                    tag: segments[0].clone(),
                })
            }
            "artist" => {
                arity("artist", 1)?;
                Ok(Route::ArtistDetail {
                    artist: segments[0].clone(),
                })
            }
            "album" => {
                arity("album", 2)?;
                Ok(Route::AlbumDetail {
                    artist: segments[0].clone(),
                    album: segments[1].clone(),
                })
            }
            other => Err(RouteError::Unknown(other.to_string())),
        }
    }
}
