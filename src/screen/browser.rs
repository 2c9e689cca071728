//! The nine screens of the browser and the triggers that fill them.

use std::future::Future;

use futures::join;

use super::controller::{self, LoadResult};
use super::expansion::Expansion;
use super::retry::RetryPolicy;
use super::state::{DataBuffer, FetchableState};
use super::store::Store;
use crate::fetch::{Fetched, Repository};
use crate::lastfm::dto;
use crate::nav::Route;

pub type TagListState = FetchableState<Vec<dto::TagRef>, Expansion>;
pub type TagDetailState = FetchableState<Option<dto::TagInfo>>;
pub type TagTopAlbumsState = FetchableState<Option<dto::AlbumList>>;
pub type TagTopArtistsState = FetchableState<Vec<dto::ArtistSummary>>;
pub type TagTopTracksState = FetchableState<Vec<dto::TrackSummary>>;
pub type AlbumDetailState = FetchableState<Option<dto::AlbumInfo>>;
pub type ArtistDetailState = FetchableState<Option<dto::ArtistInfo>>;
pub type ArtistTopTracksState = FetchableState<Vec<dto::TrackSummary>>;
pub type ArtistTopAlbumsState = FetchableState<Vec<dto::AlbumSummary>>;

/// How a screen load was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Screen shown: load once, retrying per the policy
    Show,
    /// User asked to retry a failed load
    Retry,
}

/// One store per screen
#[derive(Clone, Default)]
pub struct Screens {
    pub tags: Store<TagListState>,
    pub tag_detail: Store<TagDetailState>,
    pub tag_top_albums: Store<TagTopAlbumsState>,
    pub tag_top_artists: Store<TagTopArtistsState>,
    pub tag_top_tracks: Store<TagTopTracksState>,
    pub album_detail: Store<AlbumDetailState>,
    pub artist_detail: Store<ArtistDetailState>,
    pub artist_top_tracks: Store<ArtistTopTracksState>,
    pub artist_top_albums: Store<ArtistTopAlbumsState>,
}

impl Screens {
    /// Tear down the screens behind `route` so the next show starts from Idle.
    ///
    /// The tag list is the home screen and is never torn down.
    pub fn reset_for(&self, route: &Route) {
        match route {
            Route::TagList => {}
            Route::TagDetail { .. } => {
                self.tag_detail.reset();
                self.tag_top_albums.reset();
                self.tag_top_artists.reset();
                self.tag_top_tracks.reset();
            }
            Route::ArtistDetail { .. } => {
                self.artist_detail.reset();
                self.artist_top_tracks.reset();
                self.artist_top_albums.reset();
            }
            Route::AlbumDetail { .. } => self.album_detail.reset(),
        }
    }
}

/// Screen controllers wired to one repository
#[derive(Clone)]
pub struct Browser {
    repo: Repository,
    retry: RetryPolicy,
    pub screens: Screens,
}

impl Browser {
    pub fn new(repo: Repository, retry: RetryPolicy, collapsed_tag_count: usize) -> Self {
        let screens = Screens {
            tags: Store::new(TagListState::with_ui(Expansion::collapsed_to(
                collapsed_tag_count,
            ))),
            ..Default::default()
        };
        Self {
            repo,
            retry,
            screens,
        }
    }

    /// Navigate to `route`: fresh screen state, then load everything it shows
    pub async fn visit(&self, route: &Route) -> Vec<LoadResult> {
        tracing::debug!(%route, "visit");
        self.screens.reset_for(route);
        self.run(route, Trigger::Show).await
    }

    /// Retry every failed screen behind `route`
    pub async fn retry(&self, route: &Route) -> Vec<LoadResult> {
        self.run(route, Trigger::Retry).await
    }

    pub fn toggle_tags_expanded(&self) {
        self.screens.tags.update(|s| s.toggle_expand());
    }

    async fn run(&self, route: &Route, trigger: Trigger) -> Vec<LoadResult> {
        match route {
            Route::TagList => vec![self.top_tags(trigger).await],
            Route::TagDetail { tag } => {
                let (info, albums, artists, tracks) = join!(
                    self.tag_info(tag, trigger),
                    self.tag_top_albums(tag, trigger),
                    self.tag_top_artists(tag, trigger),
                    self.tag_top_tracks(tag, trigger),
                );
                vec![info, albums, artists, tracks]
            }
            Route::ArtistDetail { artist } => {
                let (info, tracks, albums) = join!(
                    self.artist_info(artist, trigger),
                    self.artist_top_tracks(artist, trigger),
                    self.artist_top_albums(artist, trigger),
                );
                vec![info, tracks, albums]
            }
            Route::AlbumDetail { artist, album } => {
                vec![self.album_info(artist, album, trigger).await]
            }
        }
    }

    pub async fn top_tags(&self, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.tags,
            || self.repo.top_tags(),
            |d: dto::TopTagsDoc| d.toptags.tag,
        )
        .await
    }

    pub async fn tag_info(&self, tag: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.tag_detail,
            || self.repo.tag_info(tag),
            |d: dto::TagInfoDoc| d.tag,
        )
        .await
    }

    pub async fn tag_top_albums(&self, tag: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.tag_top_albums,
            || self.repo.tag_top_albums(tag),
            |d: dto::TagTopAlbumsDoc| d.albums,
        )
        .await
    }

    pub async fn tag_top_artists(&self, tag: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.tag_top_artists,
            || self.repo.tag_top_artists(tag),
            |d: dto::TagTopArtistsDoc| d.topartists.artist,
        )
        .await
    }

    pub async fn tag_top_tracks(&self, tag: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.tag_top_tracks,
            || self.repo.tag_top_tracks(tag),
            |d: dto::TagTopTracksDoc| d.tracks.track,
        )
        .await
    }

    pub async fn album_info(&self, artist: &str, album: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.album_detail,
            || self.repo.album_info(artist, album),
            |d: dto::AlbumInfoDoc| d.album,
        )
        .await
    }

    pub async fn artist_info(&self, artist: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.artist_detail,
            || self.repo.artist_info(artist),
            |d: dto::ArtistInfoDoc| d.artist,
        )
        .await
    }

    pub async fn artist_top_tracks(&self, artist: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.artist_top_tracks,
            || self.repo.artist_top_tracks(artist),
            |d: dto::ArtistTopTracksDoc| d.toptracks.track,
        )
        .await
    }

    pub async fn artist_top_albums(&self, artist: &str, trigger: Trigger) -> LoadResult {
        self.drive(
            trigger,
            &self.screens.artist_top_albums,
            || self.repo.artist_top_albums(artist),
            |d: dto::ArtistTopAlbumsDoc| d.topalbums.album,
        )
        .await
    }

    async fn drive<B, U, D, F, Fut, X>(
        &self,
        trigger: Trigger,
        store: &Store<FetchableState<B, U>>,
        call: F,
        extract: X,
    ) -> LoadResult
    where
        B: DataBuffer,
        F: FnMut() -> Fut,
        Fut: Future<Output = Fetched<D>>,
        X: Fn(D) -> B::Item,
    {
        match trigger {
            Trigger::Show => controller::load_with_retry(store, &self.retry, call, extract).await,
            Trigger::Retry => controller::retry(store, call, extract).await,
        }
    }
}
