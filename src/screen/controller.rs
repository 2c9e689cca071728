//! Generic screen controller.
//!
//! One set of functions drives every screen's state machine:
//!
//! ```text
//! Idle ──trigger──► Loading ──Success──► Success
//!   ▲                  │
//!   └──── Failure ◄────┘ (retry re-enters Loading)
//! ```
//!
//! `extract` picks the part of the fetched document a screen keeps; the
//! buffer type decides whether it replaces (`Option`) or appends (`Vec`).

use std::future::Future;

use super::retry::RetryPolicy;
use super::state::{DataBuffer, FetchableState};
use super::status::Status;
use super::store::Store;
use crate::fetch::{Fetched, Outcome};

/// What a trigger did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// Fetch succeeded and the buffer was updated
    Loaded,
    /// Fetch failed with this message; the buffer is untouched
    Failed(String),
    /// No fetch was issued (data already present or a fetch in flight)
    Skipped,
}

impl LoadResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadResult::Loaded)
    }
}

/// Fetch unconditionally.
pub async fn load<B, U, D, F, Fut, X>(
    store: &Store<FetchableState<B, U>>,
    call: F,
    extract: X,
) -> LoadResult
where
    B: DataBuffer,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Fetched<D>>,
    X: FnOnce(D) -> B::Item,
{
    store.update(|s| s.set_status(Status::Loading));
    settle(store, call().await, extract)
}

/// Fetch only if the buffer is empty and no fetch is in flight.
///
/// This is the trigger a screen fires when it is shown; repeated triggers
/// after data arrived, or while loading, do nothing.
pub async fn load_once<B, U, D, F, Fut, X>(
    store: &Store<FetchableState<B, U>>,
    call: F,
    extract: X,
) -> LoadResult
where
    B: DataBuffer,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Fetched<D>>,
    X: FnOnce(D) -> B::Item,
{
    if !store.update_if(FetchableState::try_begin) {
        tracing::debug!("load skipped, data present or fetch in flight");
        return LoadResult::Skipped;
    }
    settle(store, call().await, extract)
}

/// User-initiated retry: fetches only from the Failure state.
pub async fn retry<B, U, D, F, Fut, X>(
    store: &Store<FetchableState<B, U>>,
    call: F,
    extract: X,
) -> LoadResult
where
    B: DataBuffer,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Fetched<D>>,
    X: FnOnce(D) -> B::Item,
{
    let began = store.update_if(|s| s.status() == Status::Failure && s.try_begin());
    if !began {
        return LoadResult::Skipped;
    }
    settle(store, call().await, extract)
}

/// [`load_once`], repeated with backoff while it fails, up to the policy's
/// attempt limit.
pub async fn load_with_retry<B, U, D, F, Fut, X>(
    store: &Store<FetchableState<B, U>>,
    policy: &RetryPolicy,
    mut call: F,
    extract: X,
) -> LoadResult
where
    B: DataBuffer,
    F: FnMut() -> Fut,
    Fut: Future<Output = Fetched<D>>,
    X: Fn(D) -> B::Item,
{
    let attempts = policy.attempts();
    let mut attempt = 1;
    loop {
        match load_once(store, &mut call, &extract).await {
            LoadResult::Failed(message) if attempt < attempts => {
                let delay = policy.delay_after(attempt);
                tracing::warn!(attempt, attempts, ?delay, %message, "load failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}

fn settle<B, U, D, X>(
    store: &Store<FetchableState<B, U>>,
    outcome: Fetched<D>,
    extract: X,
) -> LoadResult
where
    B: DataBuffer,
    X: FnOnce(D) -> B::Item,
{
    match outcome {
        Outcome::Success(envelope) => {
            let item = extract(envelope.document);
            store.update(|s| s.succeed(item));
            LoadResult::Loaded
        }
        Outcome::Failure { message, .. } => {
            store.update(|s| s.fail(message.clone()));
            LoadResult::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;
    use crate::fetch::mocks::MockApi;
    use crate::fetch::{FAILURE_MESSAGE, Repository};
    use crate::lastfm::{Method, dto};
    use crate::screen::status::Phase;

    type TagStore = Store<FetchableState<Vec<dto::TagRef>>>;
    type TagInfoStore = Store<FetchableState<Option<dto::TagInfo>>>;

    fn tags(doc: dto::TopTagsDoc) -> Vec<dto::TagRef> {
        doc.toptags.tag
    }

    fn quick_retry(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
            multiplier: 1,
        }
    }

    #[tokio::test]
    async fn test_first_trigger_loads() {
        let mock = Arc::new(MockApi::healthy(25));
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        let result = load_once(&store, || repo.top_tags(), tags).await;

        assert_eq!(result, LoadResult::Loaded);
        store.read(|s| {
            assert_eq!(s.status(), Status::Success);
            assert_eq!(s.phase(), Phase::Success);
            assert_eq!(s.data.len(), 25);
        });
        assert_eq!(mock.calls(Method::TopTags), 1);
    }

    #[tokio::test]
    async fn test_trigger_with_data_does_not_fetch() {
        let mock = Arc::new(MockApi::healthy(3));
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        load_once(&store, || repo.top_tags(), tags).await;
        let second = load_once(&store, || repo.top_tags(), tags).await;

        assert_eq!(second, LoadResult::Skipped);
        assert_eq!(mock.calls(Method::TopTags), 1);
        assert_eq!(store.read(|s| s.data.len()), 3);
    }

    #[tokio::test]
    async fn test_failure_scenario() {
        let repo = Repository::new(Arc::new(MockApi::failing()));
        let store = TagStore::default();

        let result = load_once(&store, || repo.top_tags(), tags).await;

        assert_eq!(result, LoadResult::Failed(FAILURE_MESSAGE.to_string()));
        store.read(|s| {
            assert_eq!(s.status(), Status::Failure);
            assert_eq!(s.phase(), Phase::Error);
            assert!(s.data.is_empty());
            assert_eq!(s.error(), Some(FAILURE_MESSAGE));
        });
    }

    #[tokio::test]
    async fn test_list_success_appends() {
        let store = TagStore::default();

        let small = Repository::new(Arc::new(MockApi::healthy(4)));
        let large = Repository::new(Arc::new(MockApi::healthy(7)));
        load(&store, || small.top_tags(), tags).await;
        load(&store, || large.top_tags(), tags).await;

        assert_eq!(store.read(|s| s.data.len()), 11);
    }

    #[tokio::test]
    async fn test_single_object_replaced_per_fetch() {
        let repo = Repository::new(Arc::new(MockApi::healthy(1)));
        let store = TagInfoStore::default();

        load(&store, || repo.tag_info("rock"), |doc: dto::TagInfoDoc| doc.tag).await;
        load(&store, || repo.tag_info("jazz"), |doc: dto::TagInfoDoc| doc.tag).await;

        let name = store.read(|s| s.data.as_ref().and_then(|t| t.name.clone()));
        assert_eq!(name.as_deref(), Some("jazz"));
    }

    #[tokio::test]
    async fn test_duplicate_trigger_while_loading_is_skipped() {
        let gate = Arc::new(Notify::new());
        let mock = Arc::new(MockApi::healthy(5).gated(gate.clone()));
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        let first = load_once(&store, || repo.top_tags(), tags);
        let second = async {
            // First trigger is already Loading by now
            let result = load_once(&store, || repo.top_tags(), tags).await;
            gate.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, LoadResult::Loaded);
        assert_eq!(second, LoadResult::Skipped);
        assert_eq!(mock.calls(Method::TopTags), 1);
        assert_eq!(store.read(|s| s.data.len()), 5);
    }

    #[tokio::test]
    async fn test_retry_recovers() {
        let mock = Arc::new(MockApi::healthy(2).failing_first(2));
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        let result = load_with_retry(&store, &quick_retry(3), || repo.top_tags(), tags).await;

        assert_eq!(result, LoadResult::Loaded);
        assert_eq!(mock.calls(Method::TopTags), 3);
        assert_eq!(store.read(|s| s.status()), Status::Success);
    }

    #[tokio::test]
    async fn test_retry_is_bounded() {
        let mock = Arc::new(MockApi::failing());
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        let result = load_with_retry(&store, &quick_retry(4), || repo.top_tags(), tags).await;

        assert!(matches!(result, LoadResult::Failed(_)));
        assert_eq!(mock.calls(Method::TopTags), 4);
        assert_eq!(store.read(|s| s.phase()), Phase::Error);
    }

    #[tokio::test]
    async fn test_explicit_retry_only_from_failure() {
        let mock = Arc::new(MockApi::healthy(2).failing_first(1));
        let repo = Repository::new(mock.clone());
        let store = TagStore::default();

        // Idle: nothing to retry
        assert_eq!(retry(&store, || repo.top_tags(), tags).await, LoadResult::Skipped);
        assert_eq!(mock.total_calls(), 0);

        load_once(&store, || repo.top_tags(), tags).await;
        assert_eq!(store.read(|s| s.status()), Status::Failure);

        assert_eq!(retry(&store, || repo.top_tags(), tags).await, LoadResult::Loaded);
        assert_eq!(retry(&store, || repo.top_tags(), tags).await, LoadResult::Skipped);
        assert_eq!(mock.calls(Method::TopTags), 2);
    }

    #[tokio::test]
    async fn test_subscriber_sees_loading_then_success() {
        let gate = Arc::new(Notify::new());
        let repo = Repository::new(Arc::new(MockApi::healthy(1).gated(gate.clone())));
        let store = TagStore::default();
        let mut rx = store.subscribe();

        let loader = load_once(&store, || repo.top_tags(), tags);
        let observer = async {
            rx.changed().await.unwrap();
            let first = rx.borrow_and_update().phase();
            gate.notify_one();
            rx.changed().await.unwrap();
            let second = rx.borrow_and_update().phase();
            (first, second)
        };
        let (_, phases) = tokio::join!(loader, observer);

        assert_eq!(phases, (Phase::Loading, Phase::Success));
    }
}
