//! Adapter layer: Convert Last.fm DTOs to view models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! Navigation targets are derived here from the loaded documents.

use super::domain::{Card, Detail, NO_DETAILS};
use super::dto;
use crate::nav::Route;

/// Preferred image size for cards and headers
const PREFERRED_SIZE: &str = "extralarge";

/// Strip the trailing "Read more on Last.fm" anchor from a wiki summary.
///
/// Returns [`NO_DETAILS`] when nothing readable is left.
pub fn clean_summary(wiki: Option<&dto::Wiki>) -> String {
    let text = wiki
        .and_then(|w| w.summary.as_deref())
        .and_then(|s| s.split("<a").next())
        .map(str::trim)
        .unwrap_or_default();

    if text.is_empty() {
        NO_DETAILS.to_string()
    } else {
        text.to_string()
    }
}

/// Pick the `extralarge` image, or the last non-empty one.
///
/// Last.fm lists sizes smallest first.
pub fn pick_image(images: &[dto::Image]) -> Option<String> {
    let usable = |img: &&dto::Image| img.url.as_deref().is_some_and(|u| !u.is_empty());

    images
        .iter()
        .filter(usable)
        .find(|img| img.size.as_deref() == Some(PREFERRED_SIZE))
        .or_else(|| images.iter().filter(usable).next_back())
        .and_then(|img| img.url.clone())
}

/// Format a counter with thousands separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format seconds as m:ss
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Tag chip, routed to the tag screen. Nameless tags are dropped.
pub fn tag_card(tag: &dto::TagRef) -> Option<Card> {
    let name = non_empty(tag.name.as_deref())?;
    Some(Card {
        route: Some(Route::TagDetail { tag: name.clone() }),
        title: name,
        subtitle: None,
        image: None,
    })
}

pub fn tag_cards(tags: &[dto::TagRef]) -> Vec<Card> {
    tags.iter().filter_map(tag_card).collect()
}

/// Album entry, routed to its detail screen when both names are known
pub fn album_card(album: &dto::AlbumSummary) -> Card {
    let title = non_empty(album.name.as_deref());
    let artist = album
        .artist
        .as_ref()
        .and_then(|a| non_empty(a.name.as_deref()));

    let route = match (&artist, &title) {
        (Some(artist), Some(album)) => Some(Route::AlbumDetail {
            artist: artist.clone(),
            album: album.clone(),
        }),
        _ => None,
    };

    Card {
        title: title.unwrap_or_default(),
        subtitle: artist,
        image: pick_image(&album.image),
        route,
    }
}

/// Artist entry, routed to the artist screen
pub fn artist_card(artist: &dto::ArtistSummary) -> Card {
    let name = non_empty(artist.name.as_deref());
    Card {
        route: name.clone().map(|artist| Route::ArtistDetail { artist }),
        title: name.unwrap_or_default(),
        subtitle: None,
        image: pick_image(&artist.image),
    }
}

/// Track entry. Tracks have no screen of their own.
pub fn track_card(track: &dto::TrackSummary) -> Card {
    Card {
        title: non_empty(track.name.as_deref()).unwrap_or_default(),
        subtitle: track
            .artist
            .as_ref()
            .and_then(|a| non_empty(a.name.as_deref())),
        image: pick_image(&track.image),
        route: None,
    }
}

pub fn tag_detail(tag: &dto::TagInfo) -> Detail {
    let mut stats = Vec::new();
    if let Some(total) = tag.total {
        stats.push(("Taggings".to_string(), format_count(total)));
    }
    if let Some(reach) = tag.reach {
        stats.push(("Reach".to_string(), format_count(reach)));
    }

    Detail {
        title: non_empty(tag.name.as_deref()).unwrap_or_default(),
        summary: clean_summary(tag.wiki.as_ref()),
        stats,
        ..Default::default()
    }
}

pub fn album_detail(album: &dto::AlbumInfo) -> Detail {
    let mut stats = Vec::new();
    if let Some(listeners) = album.listeners {
        stats.push(("Listeners".to_string(), format_count(listeners)));
    }
    if let Some(playcount) = album.playcount {
        stats.push(("Plays".to_string(), format_count(playcount)));
    }

    let tracks = album
        .tracks
        .as_ref()
        .map(|list| {
            list.track
                .iter()
                .filter_map(|t| {
                    let name = non_empty(t.name.as_deref())?;
                    Some(match t.duration.filter(|d| *d > 0) {
                        Some(secs) => format!("{} ({})", name, format_duration(secs)),
                        None => name,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Detail {
        title: non_empty(album.name.as_deref()).unwrap_or_default(),
        subtitle: non_empty(album.artist.as_deref()),
        image: pick_image(&album.image),
        summary: clean_summary(album.wiki.as_ref()),
        stats,
        tags: album
            .tags
            .as_ref()
            .map(|t| tag_cards(&t.tag))
            .unwrap_or_default(),
        tracks,
    }
}

pub fn artist_detail(artist: &dto::ArtistInfo) -> Detail {
    let mut stats = Vec::new();
    if let Some(s) = &artist.stats {
        if let Some(listeners) = s.listeners {
            stats.push(("Followers".to_string(), format_count(listeners)));
        }
        if let Some(playcount) = s.playcount {
            stats.push(("Playcount".to_string(), format_count(playcount)));
        }
    }

    Detail {
        title: non_empty(artist.name.as_deref()).unwrap_or_default(),
        image: pick_image(&artist.image),
        summary: clean_summary(artist.bio.as_ref()),
        stats,
        tags: artist
            .tags
            .as_ref()
            .map(|t| tag_cards(&t.tag))
            .unwrap_or_default(),
        ..Default::default()
    }
}
