//! Screen commands: load the screens behind a route, then print them.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::debug;

use super::TagSection;
use crate::config::Config;
use crate::error::{Error, ResultExt};
use crate::fetch::Repository;
use crate::lastfm::LastFmClient;
use crate::nav::Route;
use crate::render;
use crate::screen::{Browser, LoadResult, RetryPolicy, Trigger};

/// Wire the HTTP client, repository and screen controllers from `config`
pub fn build_browser(config: &Config) -> anyhow::Result<Browser> {
    if config.api.api_key.trim().is_empty() {
        anyhow::bail!(
            "No Last.fm API key configured. Pass --api-key, set LASTFM_API_KEY, \
             or add api_key to the [api] section of the config file"
        );
    }

    let client = LastFmClient::new(&config.api).with_context("Failed to set up Last.fm client")?;
    debug!(endpoint = %client.endpoint(), "client ready");

    Ok(Browser::new(
        Repository::new(Arc::new(client)),
        RetryPolicy::from(config.retry.clone()),
        config.display.collapsed_tag_count,
    ))
}

/// Show the top tags (home screen)
pub fn cmd_tags(
    rt: &Runtime,
    config: &Config,
    expanded: bool,
    retry_failed: bool,
) -> anyhow::Result<()> {
    let browser = build_browser(config)?;
    let route = Route::TagList;

    let results = rt.block_on(load_route(&browser, &route, retry_failed));
    if expanded {
        browser.toggle_tags_expanded();
    }

    print!("{}", render::route(&browser.screens, &route));
    check(&route, results)
}

/// Show a tag screen, optionally only one of its sections
pub fn cmd_tag(
    rt: &Runtime,
    config: &Config,
    name: &str,
    section: TagSection,
    retry_failed: bool,
) -> anyhow::Result<()> {
    let browser = build_browser(config)?;
    let route = Route::TagDetail {
        tag: name.to_string(),
    };

    let results = rt.block_on(async {
        let first = load_tag_section(&browser, &route, name, section, Trigger::Show).await;
        if retry_failed && has_failure(&first) {
            debug!(%route, "retrying failed sections");
            let again = load_tag_section(&browser, &route, name, section, Trigger::Retry).await;
            merge_retried(first, again)
        } else {
            first
        }
    });

    // Sections that were not loaded are Idle and render as nothing
    print!("{}", render::route(&browser.screens, &route));
    check(&route, results)
}

/// Show every screen behind `route`
pub fn cmd_open(
    rt: &Runtime,
    config: &Config,
    route: &Route,
    retry_failed: bool,
) -> anyhow::Result<()> {
    let browser = build_browser(config)?;
    let results = rt.block_on(load_route(&browser, route, retry_failed));

    print!("{}", render::route(&browser.screens, route));
    check(route, results)
}

/// Visit `route`; with `retry_failed`, screens still in Failure get one
/// explicit retry.
async fn load_route(browser: &Browser, route: &Route, retry_failed: bool) -> Vec<LoadResult> {
    let first = browser.visit(route).await;
    if retry_failed && has_failure(&first) {
        debug!(%route, "retrying failed screens");
        let again = browser.retry(route).await;
        return merge_retried(first, again);
    }
    first
}

async fn load_tag_section(
    browser: &Browser,
    route: &Route,
    name: &str,
    section: TagSection,
    trigger: Trigger,
) -> Vec<LoadResult> {
    match (section, trigger) {
        (TagSection::All, Trigger::Show) => browser.visit(route).await,
        (TagSection::All, Trigger::Retry) => browser.retry(route).await,
        (TagSection::Info, _) => vec![browser.tag_info(name, trigger).await],
        (TagSection::Albums, _) => vec![browser.tag_top_albums(name, trigger).await],
        (TagSection::Artists, _) => vec![browser.tag_top_artists(name, trigger).await],
        (TagSection::Tracks, _) => vec![browser.tag_top_tracks(name, trigger).await],
    }
}

fn has_failure(results: &[LoadResult]) -> bool {
    results.iter().any(|r| matches!(r, LoadResult::Failed(_)))
}

/// Screens the retry skipped (not in Failure) keep their first result
fn merge_retried(first: Vec<LoadResult>, retried: Vec<LoadResult>) -> Vec<LoadResult> {
    first
        .into_iter()
        .zip(retried)
        .map(|(before, after)| match after {
            LoadResult::Skipped => before,
            after => after,
        })
        .collect()
}

/// Turn the first failed load into an error so the process exits non-zero
fn check(route: &Route, results: Vec<LoadResult>) -> anyhow::Result<()> {
    let failed = results.into_iter().find_map(|r| match r {
        LoadResult::Failed(message) => Some(message),
        _ => None,
    });

    match failed {
        Some(message) => Err(Error::load(route.to_string(), message).into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::mocks::MockApi;
    use crate::screen::{Phase, Status};
    use crate::test_utils::{CannedServer, closed_port_url, fixtures};

    fn config_for(base_url: String) -> Config {
        let mut config = Config::default();
        config.api.base_url = base_url;
        config.api.api_key = "test-key".to_string();
        config.retry.max_attempts = 1;
        config
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let err = build_browser(&Config::default()).err().unwrap();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_open_album_against_server() {
        let rt = Runtime::new().unwrap();
        let body = serde_json::to_string(&fixtures::album_info("Cher", "Believe")).unwrap();
        let server = rt.block_on(CannedServer::start(200, body));

        let route = Route::AlbumDetail {
            artist: "Cher".to_string(),
            album: "Believe".to_string(),
        };
        cmd_open(&rt, &config_for(server.base_url()), &route, false).unwrap();

        let request = server.last_request().unwrap();
        assert_eq!(request.query["method"], "album.getInfo");
        assert_eq!(request.query["api_key"], "test-key");
        assert_eq!(request.query["artist"], "Cher");
    }

    #[test]
    fn test_unreachable_api_fails_with_load_error() {
        let rt = Runtime::new().unwrap();
        let base_url = rt.block_on(closed_port_url());

        let err = cmd_tags(&rt, &config_for(base_url), false, false).unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert!(matches!(err, Error::Load { ref screen, .. } if screen == "tags"));
    }

    fn mock_browser(mock: MockApi) -> Browser {
        Browser::new(Repository::new(Arc::new(mock)), RetryPolicy::once(), 10)
    }

    #[tokio::test]
    async fn test_retry_failed_recovers_screen() {
        let browser = mock_browser(MockApi::healthy(3).failing_first(1));

        let results = load_route(&browser, &Route::TagList, true).await;

        assert_eq!(results, vec![LoadResult::Loaded]);
        assert_eq!(browser.screens.tags.read(|s| s.status()), Status::Success);
        assert_eq!(browser.screens.tags.read(|s| s.data.len()), 3);
    }

    #[tokio::test]
    async fn test_without_retry_failed_screen_stays_failed() {
        let browser = mock_browser(MockApi::healthy(3).failing_first(1));

        let results = load_route(&browser, &Route::TagList, false).await;

        assert!(matches!(results[0], LoadResult::Failed(_)));
        assert_eq!(browser.screens.tags.read(|s| s.phase()), Phase::Error);
    }

    #[tokio::test]
    async fn test_retry_failed_only_refetches_failed_sections() {
        let mock = Arc::new(MockApi::healthy(2).failing_first(1));
        let browser = Browser::new(Repository::new(mock.clone()), RetryPolicy::once(), 10);
        let route = Route::TagDetail {
            tag: "rock".to_string(),
        };

        let results = load_tag_section(&browser, &route, "rock", TagSection::Info, Trigger::Show).await;
        assert!(has_failure(&results));
        let again = load_tag_section(&browser, &route, "rock", TagSection::Info, Trigger::Retry).await;
        assert_eq!(merge_retried(results, again), vec![LoadResult::Loaded]);
        assert_eq!(mock.total_calls(), 2);
    }

    #[test]
    fn test_merge_keeps_results_the_retry_skipped() {
        let first = vec![LoadResult::Loaded, LoadResult::Failed("Failed".to_string())];
        let retried = vec![LoadResult::Skipped, LoadResult::Loaded];
        assert_eq!(
            merge_retried(first, retried),
            vec![LoadResult::Loaded, LoadResult::Loaded]
        );
    }

    #[test]
    fn test_check_passes_skipped_and_loaded() {
        let results = vec![LoadResult::Loaded, LoadResult::Skipped];
        assert!(check(&Route::TagList, results).is_ok());
    }
}
