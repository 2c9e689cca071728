//! Plain-text rendering of screen state.
//!
//! Rendering is a pure function of a screen's state: the phase picks the
//! view (nothing, spinner, error text, content) and the data supplies the
//! content lines.

use crate::lastfm::{Card, Detail, adapter};
use crate::nav::Route;
use crate::screen::browser::{
    AlbumDetailState, ArtistDetailState, ArtistTopAlbumsState, TagDetailState, TagListState,
    TagTopAlbumsState, TagTopArtistsState, TagTopTracksState,
};
use crate::screen::{DataBuffer, FetchableState, Phase, Screens};

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Something went wrong.";
pub const EMPTY_TEXT: &str = "No results.";

/// Content lines of a loaded screen
pub trait Render {
    fn content(&self) -> Vec<String>;
}

/// Render one screen under `heading`. Idle screens render as nothing.
pub fn screen<B, U>(heading: &str, state: &FetchableState<B, U>) -> String
where
    B: DataBuffer,
    FetchableState<B, U>: Render,
{
    let body = match state.phase() {
        Phase::Idle => return String::new(),
        Phase::Loading => vec![LOADING_TEXT.to_string()],
        Phase::Error => vec![ERROR_TEXT.to_string()],
        Phase::Success => state.content(),
    };

    let mut out = format!("{}\n{}\n", heading, "=".repeat(heading.chars().count()));
    for line in body {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Render every screen behind `route`, skipping the ones still Idle
pub fn route(screens: &Screens, route: &Route) -> String {
    let parts = match route {
        Route::TagList => vec![screens.tags.read(|s| screen("Tags", s))],
        Route::TagDetail { tag } => vec![
            screens.tag_detail.read(|s| screen(&format!("Tag: {}", tag), s)),
            screens.tag_top_albums.read(|s| screen("Top albums", s)),
            screens.tag_top_artists.read(|s| screen("Top artists", s)),
            screens.tag_top_tracks.read(|s| screen("Top tracks", s)),
        ],
        Route::ArtistDetail { artist } => vec![
            screens
                .artist_detail
                .read(|s| screen(&format!("Artist: {}", artist), s)),
            screens.artist_top_tracks.read(|s| screen("Top tracks", s)),
            screens.artist_top_albums.read(|s| screen("Top albums", s)),
        ],
        Route::AlbumDetail { album, .. } => vec![
            screens
                .album_detail
                .read(|s| screen(&format!("Album: {}", album), s)),
        ],
    };

    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn card_line(index: usize, card: &Card) -> String {
    let mut line = format!("{:>2}. {}", index + 1, card.title);
    if let Some(subtitle) = &card.subtitle {
        line.push_str(" - ");
        line.push_str(subtitle);
    }
    if let Some(route) = &card.route {
        line.push_str(&format!("  [{}]", route));
    }
    line
}

fn card_lines<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    let lines: Vec<String> = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| card_line(i, card))
        .collect();
    if lines.is_empty() {
        vec![EMPTY_TEXT.to_string()]
    } else {
        lines
    }
}

fn detail_lines(detail: &Detail) -> Vec<String> {
    let mut lines = Vec::new();

    match &detail.subtitle {
        Some(subtitle) => lines.push(format!("{} by {}", detail.title, subtitle)),
        None => lines.push(detail.title.clone()),
    }
    if let Some(image) = &detail.image {
        lines.push(format!("Image: {}", image));
    }
    if !detail.stats.is_empty() {
        let stats: Vec<String> = detail
            .stats
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        lines.push(stats.join("  "));
    }

    lines.push(String::new());
    lines.push(detail.summary.clone());

    if !detail.tags.is_empty() {
        let names: Vec<&str> = detail.tags.iter().map(|t| t.title.as_str()).collect();
        lines.push(String::new());
        lines.push(format!("Tags: {}", names.join(", ")));
    }

    if !detail.tracks.is_empty() {
        lines.push(String::new());
        lines.push("Tracks:".to_string());
        lines.extend(
            detail
                .tracks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{:>2}. {}", i + 1, t)),
        );
    }

    lines
}

impl Render for TagListState {
    fn content(&self) -> Vec<String> {
        let cards = adapter::tag_cards(self.visible());
        let mut lines = card_lines(&cards);
        let hidden = self.data.len() - self.visible().len();
        if hidden > 0 {
            lines.push(format!("... {} more", hidden));
        }
        lines
    }
}

impl Render for TagDetailState {
    fn content(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(|tag| detail_lines(&adapter::tag_detail(tag)))
            .unwrap_or_default()
    }
}

impl Render for TagTopAlbumsState {
    fn content(&self) -> Vec<String> {
        let cards: Vec<Card> = self
            .data
            .iter()
            .flat_map(|list| list.album.iter().map(adapter::album_card))
            .collect();
        card_lines(&cards)
    }
}

impl Render for TagTopArtistsState {
    fn content(&self) -> Vec<String> {
        let cards: Vec<Card> = self.data.iter().map(adapter::artist_card).collect();
        card_lines(&cards)
    }
}

/// Shared by the tag and artist top-track screens
impl Render for TagTopTracksState {
    fn content(&self) -> Vec<String> {
        let cards: Vec<Card> = self.data.iter().map(adapter::track_card).collect();
        card_lines(&cards)
    }
}

impl Render for AlbumDetailState {
    fn content(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(|album| detail_lines(&adapter::album_detail(album)))
            .unwrap_or_default()
    }
}

impl Render for ArtistDetailState {
    fn content(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(|artist| detail_lines(&adapter::artist_detail(artist)))
            .unwrap_or_default()
    }
}

impl Render for ArtistTopAlbumsState {
    fn content(&self) -> Vec<String> {
        let cards: Vec<Card> = self.data.iter().map(adapter::album_card).collect();
        card_lines(&cards)
    }
}
