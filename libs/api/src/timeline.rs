//! Pagination drain for cursor-based timelines.

use crate::TimelineProvider;
use crate::error::ApiError;
use crate::models::Tweet;

/// Drain a user's timeline into a single ordered collection.
///
/// Fetches pages strictly sequentially, one page in flight and no prefetch,
/// following each page's cursor until the provider stops returning one.
/// There is no assumed upper bound on the total number of tweets.
///
/// If any page fails the whole drain fails; partial timelines are not
/// valid output, so everything accumulated up to that point is dropped
/// with the returned error.
pub async fn drain_timeline<P>(provider: &P, user_id: &str) -> Result<Vec<Tweet>, ApiError>
where
    P: TimelineProvider + ?Sized,
{
    let mut tweets = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = provider.timeline_page(user_id, cursor.as_deref()).await?;
        tweets.extend(page.tweets);

        match page.next_token {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    Ok(tweets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimelinePage, User};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tweet(id: &str) -> Tweet {
        Tweet {
            id: id.to_string(),
            text: format!("tweet {}", id),
            extra: serde_json::Map::new(),
        }
    }

    /// Serves a scripted sequence of pages, counting fetches.
    struct ScriptedProvider {
        pages: Mutex<Vec<Result<TimelinePage, ApiError>>>,
        fetches: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(pages: Vec<Result<TimelinePage, ApiError>>) -> Self {
            Self {
                pages: Mutex::new(pages),
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TimelineProvider for ScriptedProvider {
        async fn user_by_username(&self, username: &str) -> Result<User, ApiError> {
            Err(ApiError::UserNotFound {
                username: username.to_string(),
            })
        }

        async fn timeline_page(
            &self,
            _user_id: &str,
            _pagination_token: Option<&str>,
        ) -> Result<TimelinePage, ApiError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                // Script exhausted: an empty terminal page
                return Ok(TimelinePage::default());
            }
            pages.remove(0)
        }
    }

    fn page(ids: &[&str], next_token: Option<&str>) -> Result<TimelinePage, ApiError> {
        Ok(TimelinePage {
            tweets: ids.iter().map(|id| tweet(id)).collect(),
            next_token: next_token.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn empty_timeline_yields_empty_collection() {
        let provider = ScriptedProvider::new(vec![page(&[], None)]);
        let tweets = drain_timeline(&provider, "1").await.unwrap();
        assert!(tweets.is_empty());
        assert_eq!(provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn accumulates_pages_in_provider_order() {
        let provider = ScriptedProvider::new(vec![
            page(&["1", "2"], Some("cursor-a")),
            page(&["3"], Some("cursor-b")),
            page(&["4", "5"], None),
        ]);

        let tweets = drain_timeline(&provider, "1").await.unwrap();
        let ids: Vec<&str> = tweets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(provider.fetch_count(), 3);
    }

    #[tokio::test]
    async fn stops_after_last_cursor_without_extra_fetch() {
        // Two full pages of 100, then exhaustion: exactly two fetches
        let first: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let second: Vec<String> = (100..200).map(|i| i.to_string()).collect();
        let provider = ScriptedProvider::new(vec![
            page(&first.iter().map(String::as_str).collect::<Vec<_>>(), Some("next")),
            page(&second.iter().map(String::as_str).collect::<Vec<_>>(), None),
        ]);

        let tweets = drain_timeline(&provider, "1").await.unwrap();
        assert_eq!(tweets.len(), 200);
        assert_eq!(tweets[0].id, "0");
        assert_eq!(tweets[199].id, "199");
        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failing_page_aborts_the_drain() {
        let provider = ScriptedProvider::new(vec![
            page(&["1", "2"], Some("cursor-a")),
            Err(ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            }),
            page(&["3"], None),
        ]);

        let result = drain_timeline(&provider, "1").await;
        assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
        // The drain stopped at the failure, it did not try the next page
        assert_eq!(provider.fetch_count(), 2);
    }
}
