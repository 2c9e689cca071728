//! Last.fm API Data Transfer Objects
//!
//! These types match what the Last.fm 2.0 JSON API returns. Every nested
//! field is optional because payloads differ between endpoints. The root
//! key of each document is required: a body without it is treated as a
//! malformed response by the client.
//!
//! `Default` on every document is the placeholder held by a failed
//! envelope.
//!
//! API Reference: https://www.last.fm/api

use serde::{Deserialize, Serialize};

use super::de;

// ============================================================================
// Shared fragments
// ============================================================================

/// Image variant, one per size
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Image {
    #[serde(rename = "#text", default)]
    pub url: Option<String>,
    /// small, medium, large, extralarge or mega
    #[serde(default)]
    pub size: Option<String>,
}

/// Wiki/bio block
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Wiki {
    #[serde(default)]
    pub published: Option<String>,
    /// HTML-ish summary ending with a "Read more on Last.fm" anchor
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Tag as it appears in lists
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub reach: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagList {
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub tag: Vec<TagRef>,
}

/// Artist reference embedded in album and track entries
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// `@attr` block carrying a chart position
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RankAttr {
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub rank: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub listeners: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub playcount: Option<u64>,
}

// ============================================================================
// List entries
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub playcount: Option<u64>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<RankAttr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumList {
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub album: Vec<AlbumSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub listeners: Option<u64>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<RankAttr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistList {
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub artist: Vec<ArtistSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TrackSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Seconds
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub playcount: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub listeners: Option<u64>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<RankAttr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TrackList {
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub track: Vec<TrackSummary>,
}

// ============================================================================
// Detail entities
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub reach: Option<u64>,
    #[serde(default)]
    pub wiki: Option<Wiki>,
}

/// Track listing entry inside `album.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub duration: Option<u64>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<RankAttr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumTrackList {
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub track: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumInfo {
    #[serde(default)]
    pub name: Option<String>,
    /// Plain artist name here, unlike list entries
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub listeners: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub playcount: Option<u64>,
    #[serde(default, deserialize_with = "de::object_or_empty")]
    pub tags: Option<TagList>,
    #[serde(default, deserialize_with = "de::object_or_empty")]
    pub tracks: Option<AlbumTrackList>,
    #[serde(default)]
    pub wiki: Option<Wiki>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mbid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default, deserialize_with = "de::object_or_empty")]
    pub tags: Option<TagList>,
    #[serde(default)]
    pub bio: Option<Wiki>,
}

// ============================================================================
// Documents (one per endpoint)
// ============================================================================

/// `tag.getTopTags`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TopTagsDoc {
    pub toptags: TagList,
}

/// `tag.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagInfoDoc {
    pub tag: TagInfo,
}

/// `tag.getTopAlbums`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagTopAlbumsDoc {
    pub albums: AlbumList,
}

/// `tag.getTopArtists`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagTopArtistsDoc {
    pub topartists: ArtistList,
}

/// `tag.getTopTracks`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagTopTracksDoc {
    pub tracks: TrackList,
}

/// `album.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumInfoDoc {
    pub album: AlbumInfo,
}

/// `artist.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistInfoDoc {
    pub artist: ArtistInfo,
}

/// `artist.getTopTracks`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistTopTracksDoc {
    pub toptracks: TrackList,
}

/// `artist.getTopAlbums`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistTopAlbumsDoc {
    pub topalbums: AlbumList,
}

/// Error body, sent with 4xx statuses and occasionally with 200
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamError {
    pub error: u32,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
