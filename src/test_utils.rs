//! Test utilities and fixtures for musicwiki tests.
//!
//! - [`CannedServer`]: a throwaway axum server answering every request with
//!   the same status and body, recording what it received
//! - [`closed_port_url`]: a base URL nothing listens on
//! - [`fixtures`]: document builders for mocks and renderer tests

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as the canned server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn respond(
    State(canned): State<Canned>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    canned.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query,
    });
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// axum server bound to an ephemeral localhost port that answers every
/// request with one status and body.
///
/// The server task is aborted when this handle is dropped.
pub struct CannedServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl CannedServer {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().fallback(respond).with_state(Canned {
            status: StatusCode::from_u16(status).expect("Invalid status code"),
            body: body.into(),
            requests: requests.clone(),
        });
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Path and decoded query parameters of the most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Base URL of a localhost port that was bound and released.
///
/// Connections to it are refused, which exercises the transport-failure path.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

/// Document builders with predictable names (`tag-0`, `Album 1`, ...)
pub mod fixtures {
    use crate::lastfm::dto;

    fn images(seed: &str) -> Vec<dto::Image> {
        ["small", "medium", "large", "extralarge"]
            .iter()
            .map(|size| dto::Image {
                url: Some(format!("https://img.example/{}/{}.png", seed, size)),
                size: Some(size.to_string()),
            })
            .collect()
    }

    fn wiki(subject: &str) -> dto::Wiki {
        dto::Wiki {
            published: None,
            summary: Some(format!(
                "All about {}. <a href=\"https://www.last.fm/\">Read more on Last.fm</a>",
                subject
            )),
            content: None,
        }
    }

    fn tag_refs(names: &[&str]) -> dto::TagList {
        dto::TagList {
            tag: names
                .iter()
                .map(|name| dto::TagRef {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn top_tags(n: usize) -> dto::TopTagsDoc {
        dto::TopTagsDoc {
            toptags: dto::TagList {
                tag: (0..n)
                    .map(|i| dto::TagRef {
                        name: Some(format!("tag-{}", i)),
                        count: Some(1000 - i as u64),
                        reach: Some(100),
                        url: None,
                    })
                    .collect(),
            },
        }
    }

    pub fn tag_info(name: &str) -> dto::TagInfoDoc {
        dto::TagInfoDoc {
            tag: dto::TagInfo {
                name: Some(name.to_string()),
                total: Some(12345),
                reach: Some(678),
                wiki: Some(wiki(name)),
            },
        }
    }

    pub fn albums(n: usize) -> dto::AlbumList {
        dto::AlbumList {
            album: (0..n)
                .map(|i| dto::AlbumSummary {
                    name: Some(format!("Album {}", i)),
                    artist: Some(dto::ArtistRef {
                        name: Some(format!("Artist {}", i)),
                        ..Default::default()
                    }),
                    image: images(&format!("album-{}", i)),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn artists(n: usize) -> dto::ArtistList {
        dto::ArtistList {
            artist: (0..n)
                .map(|i| dto::ArtistSummary {
                    name: Some(format!("Artist {}", i)),
                    image: images(&format!("artist-{}", i)),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn tracks(n: usize) -> dto::TrackList {
        dto::TrackList {
            track: (0..n)
                .map(|i| dto::TrackSummary {
                    name: Some(format!("Track {}", i)),
                    duration: Some(180 + i as u64),
                    artist: Some(dto::ArtistRef {
                        name: Some(format!("Artist {}", i)),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn album_info(artist: &str, album: &str) -> dto::AlbumInfoDoc {
        dto::AlbumInfoDoc {
            album: dto::AlbumInfo {
                name: Some(album.to_string()),
                artist: Some(artist.to_string()),
                image: images(album),
                listeners: Some(5000),
                playcount: Some(25000),
                tags: Some(tag_refs(&["pop", "dance"])),
                tracks: Some(dto::AlbumTrackList {
                    track: vec![dto::AlbumTrack {
                        name: Some("Opening".to_string()),
                        duration: Some(200),
                        attr: None,
                    }],
                }),
                wiki: Some(wiki(album)),
                ..Default::default()
            },
        }
    }

    pub fn artist_info(artist: &str) -> dto::ArtistInfoDoc {
        dto::ArtistInfoDoc {
            artist: dto::ArtistInfo {
                name: Some(artist.to_string()),
                image: images(artist),
                stats: Some(dto::Stats {
                    listeners: Some(1_000_000),
                    playcount: Some(50_000_000),
                }),
                tags: Some(tag_refs(&["pop"])),
                bio: Some(wiki(artist)),
                ..Default::default()
            },
        }
    }
}
