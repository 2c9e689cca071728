//! Last.fm HTTP client
//!
//! Issues `GET {base_url}/2.0/?method=...&api_key=...&format=json` requests
//! and deserializes the body into the matching document type.
//! See: https://www.last.fm/api/rest
//!
//! ## Failure normalization
//!
//! Every public call returns an [`Envelope`], never an error. Network
//! failures, non-2xx statuses, `{"error": N}` bodies and malformed JSON are
//! all logged with their cause and folded into `status = false`.

use serde::de::DeserializeOwned;

use super::domain::ApiError;
use super::dto;
use crate::config::ApiConfig;
use crate::fetch::Envelope;

/// API method names, one per fetch operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    TopTags,
    TagInfo,
    TagTopAlbums,
    TagTopArtists,
    TagTopTracks,
    AlbumInfo,
    ArtistInfo,
    ArtistTopTracks,
    ArtistTopAlbums,
}

impl Method {
    #[cfg(test)]
    pub const ALL: [Method; 9] = [
        Method::TopTags,
        Method::TagInfo,
        Method::TagTopAlbums,
        Method::TagTopArtists,
        Method::TagTopTracks,
        Method::AlbumInfo,
        Method::ArtistInfo,
        Method::ArtistTopTracks,
        Method::ArtistTopAlbums,
    ];

    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::TopTags => "tag.getTopTags",
            Method::TagInfo => "tag.getInfo",
            Method::TagTopAlbums => "tag.getTopAlbums",
            Method::TagTopArtists => "tag.getTopArtists",
            Method::TagTopTracks => "tag.getTopTracks",
            Method::AlbumInfo => "album.getInfo",
            Method::ArtistInfo => "artist.getInfo",
            Method::ArtistTopTracks => "artist.getTopTracks",
            Method::ArtistTopAlbums => "artist.getTopAlbums",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last.fm API client
pub struct LastFmClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl LastFmClient {
    /// Create a client from injected configuration
    ///
    /// The client accepts gzip-compressed responses and applies the
    /// configured request timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .gzip(true)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/2.0/", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL without query parameters
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn top_tags(&self) -> Envelope<dto::TopTagsDoc> {
        self.call(Method::TopTags, &[]).await
    }

    pub async fn tag_info(&self, tag: &str) -> Envelope<dto::TagInfoDoc> {
        self.call(Method::TagInfo, &[("tag", tag)]).await
    }

    pub async fn tag_top_albums(&self, tag: &str) -> Envelope<dto::TagTopAlbumsDoc> {
        self.call(Method::TagTopAlbums, &[("tag", tag)]).await
    }

    pub async fn tag_top_artists(&self, tag: &str) -> Envelope<dto::TagTopArtistsDoc> {
        self.call(Method::TagTopArtists, &[("tag", tag)]).await
    }

    pub async fn tag_top_tracks(&self, tag: &str) -> Envelope<dto::TagTopTracksDoc> {
        self.call(Method::TagTopTracks, &[("tag", tag)]).await
    }

    pub async fn album_info(&self, artist: &str, album: &str) -> Envelope<dto::AlbumInfoDoc> {
        self.call(Method::AlbumInfo, &[("artist", artist), ("album", album)])
            .await
    }

    pub async fn artist_info(&self, artist: &str) -> Envelope<dto::ArtistInfoDoc> {
        self.call(Method::ArtistInfo, &[("artist", artist)]).await
    }

    pub async fn artist_top_tracks(&self, artist: &str) -> Envelope<dto::ArtistTopTracksDoc> {
        self.call(Method::ArtistTopTracks, &[("artist", artist)])
            .await
    }

    pub async fn artist_top_albums(&self, artist: &str) -> Envelope<dto::ArtistTopAlbumsDoc> {
        self.call(Method::ArtistTopAlbums, &[("artist", artist)])
            .await
    }

    /// Perform one call and wrap the outcome in an envelope
    pub async fn call<T>(&self, method: Method, params: &[(&str, &str)]) -> Envelope<T>
    where
        T: DeserializeOwned + Default,
    {
        let mut envelope = Envelope::pending();
        match self.send(method, params).await {
            Ok(document) => {
                tracing::debug!(%method, "request succeeded");
                envelope.resolve(document);
            }
            Err(e) => {
                tracing::warn!(%method, ?params, error = %e, "request failed");
                envelope.reject();
            }
        }
        envelope
    }

    /// Send the HTTP request and parse the response
    async fn send<T>(&self, method: Method, params: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("method", method.as_str()),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            // Last.fm usually explains itself in the body
            if let Ok(error) = serde_json::from_str::<dto::UpstreamError>(&body) {
                return Err(upstream(error));
            }
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        parse_document(&body)
    }
}

/// Parse a 2xx body, rejecting error payloads sent with a success status
pub fn parse_document<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Ok(error) = serde_json::from_str::<dto::UpstreamError>(body) {
        return Err(upstream(error));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn upstream(error: dto::UpstreamError) -> ApiError {
    ApiError::Upstream {
        code: error.error,
        message: error.message.unwrap_or_default(),
    }
}
