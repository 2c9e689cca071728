//! Data-access layer: every API call passed through [`fetch`].

use std::sync::Arc;

use super::envelope::Envelope;
use super::orchestrator::fetch;
use super::outcome::Outcome;
use super::traits::MusicApi;
use crate::lastfm::dto;

/// Outcome of one repository call
pub type Fetched<T> = Outcome<Envelope<T>>;

/// Shared handle over a [`MusicApi`] implementation
#[derive(Clone)]
pub struct Repository {
    api: Arc<dyn MusicApi>,
}

impl Repository {
    pub fn new(api: Arc<dyn MusicApi>) -> Self {
        Self { api }
    }

    pub async fn top_tags(&self) -> Fetched<dto::TopTagsDoc> {
        fetch(|| self.api.top_tags()).await
    }

    pub async fn tag_info(&self, tag: &str) -> Fetched<dto::TagInfoDoc> {
        fetch(|| self.api.tag_info(tag)).await
    }

    pub async fn tag_top_albums(&self, tag: &str) -> Fetched<dto::TagTopAlbumsDoc> {
        fetch(|| self.api.tag_top_albums(tag)).await
    }

    pub async fn tag_top_artists(&self, tag: &str) -> Fetched<dto::TagTopArtistsDoc> {
        fetch(|| self.api.tag_top_artists(tag)).await
    }

    pub async fn tag_top_tracks(&self, tag: &str) -> Fetched<dto::TagTopTracksDoc> {
        fetch(|| self.api.tag_top_tracks(tag)).await
    }

    pub async fn album_info(&self, artist: &str, album: &str) -> Fetched<dto::AlbumInfoDoc> {
        fetch(|| self.api.album_info(artist, album)).await
    }

    pub async fn artist_info(&self, artist: &str) -> Fetched<dto::ArtistInfoDoc> {
        fetch(|| self.api.artist_info(artist)).await
    }

    pub async fn artist_top_tracks(&self, artist: &str) -> Fetched<dto::ArtistTopTracksDoc> {
        fetch(|| self.api.artist_top_tracks(artist)).await
    }

    pub async fn artist_top_albums(&self, artist: &str) -> Fetched<dto::ArtistTopAlbumsDoc> {
        fetch(|| self.api.artist_top_albums(artist)).await
    }
}
