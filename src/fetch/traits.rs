//! Trait definition for the music metadata API.
//!
//! This trait enables dependency injection and mocking for tests.
//! Production code uses [`LastFmClient`], while tests substitute
//! [`mocks::MockApi`].

use async_trait::async_trait;

use super::envelope::Envelope;
use crate::lastfm::{LastFmClient, dto};

/// The nine fetch operations.
///
/// Implementations must not fail: every HTTP-level problem is reported as
/// an envelope with `status = false`.
#[async_trait]
pub trait MusicApi: Send + Sync {
    async fn top_tags(&self) -> Envelope<dto::TopTagsDoc>;
    async fn tag_info(&self, tag: &str) -> Envelope<dto::TagInfoDoc>;
    async fn tag_top_albums(&self, tag: &str) -> Envelope<dto::TagTopAlbumsDoc>;
    async fn tag_top_artists(&self, tag: &str) -> Envelope<dto::TagTopArtistsDoc>;
    async fn tag_top_tracks(&self, tag: &str) -> Envelope<dto::TagTopTracksDoc>;
    async fn album_info(&self, artist: &str, album: &str) -> Envelope<dto::AlbumInfoDoc>;
    async fn artist_info(&self, artist: &str) -> Envelope<dto::ArtistInfoDoc>;
    async fn artist_top_tracks(&self, artist: &str) -> Envelope<dto::ArtistTopTracksDoc>;
    async fn artist_top_albums(&self, artist: &str) -> Envelope<dto::ArtistTopAlbumsDoc>;
}

#[async_trait]
impl MusicApi for LastFmClient {
    async fn top_tags(&self) -> Envelope<dto::TopTagsDoc> {
        LastFmClient::top_tags(self).await
    }

    async fn tag_info(&self, tag: &str) -> Envelope<dto::TagInfoDoc> {
        LastFmClient::tag_info(self, tag).await
    }

    async fn tag_top_albums(&self, tag: &str) -> Envelope<dto::TagTopAlbumsDoc> {
        LastFmClient::tag_top_albums(self, tag).await
    }

    async fn tag_top_artists(&self, tag: &str) -> Envelope<dto::TagTopArtistsDoc> {
        LastFmClient::tag_top_artists(self, tag).await
    }

    async fn tag_top_tracks(&self, tag: &str) -> Envelope<dto::TagTopTracksDoc> {
        LastFmClient::tag_top_tracks(self, tag).await
    }

    async fn album_info(&self, artist: &str, album: &str) -> Envelope<dto::AlbumInfoDoc> {
        LastFmClient::album_info(self, artist, album).await
    }

    async fn artist_info(&self, artist: &str) -> Envelope<dto::ArtistInfoDoc> {
        LastFmClient::artist_info(self, artist).await
    }

    async fn artist_top_tracks(&self, artist: &str) -> Envelope<dto::ArtistTopTracksDoc> {
        LastFmClient::artist_top_tracks(self, artist).await
    }

    async fn artist_top_albums(&self, artist: &str) -> Envelope<dto::ArtistTopAlbumsDoc> {
        LastFmClient::artist_top_albums(self, artist).await
    }
}
