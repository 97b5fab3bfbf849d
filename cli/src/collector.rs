//! Interactive collection of the target user's profile and timeline.
//!
//! Runs only after the login attempt has reached `TokenExchanged`: blocks
//! on one line of stdin for the target handle, resolves it, and drains the
//! timeline through the authenticated provider.

use std::io::{self, Write};
use tracing::debug;
use tweetvault_api::timeline::drain_timeline;
use tweetvault_api::{ApiError, TimelineArchive, TimelineProvider};

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not read username from the terminal: {0}")]
    Input(#[from] io::Error),
}

/// Prompt for a handle and collect that user's profile plus full timeline.
pub async fn collect<P>(provider: &P) -> Result<TimelineArchive, CollectError>
where
    P: TimelineProvider + ?Sized,
{
    let handle = prompt_for_handle()?;
    collect_handle(provider, &handle).await
}

/// Collect a known handle's profile and timeline.
pub async fn collect_handle<P>(provider: &P, handle: &str) -> Result<TimelineArchive, CollectError>
where
    P: TimelineProvider + ?Sized,
{
    println!("Fetching user data of (@{})...", handle);
    let user = provider.user_by_username(handle).await?;
    debug!("resolved @{} to user id {}", user.username, user.id);

    println!("Collecting {} (@{}) tweets...", user.name, user.username);
    let tweets = drain_timeline(provider, &user.id).await?;

    Ok(TimelineArchive { user, tweets })
}

fn prompt_for_handle() -> Result<String, CollectError> {
    print!("Type twitter username: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(normalize_handle(&line))
}

/// Trim the operator's input and accept both `alice` and `@alice`.
fn normalize_handle(input: &str) -> String {
    let trimmed = input.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tweetvault_api::models::{TimelinePage, Tweet, User};

    #[test]
    fn normalize_strips_whitespace_and_at_prefix() {
        assert_eq!(normalize_handle("alice\n"), "alice");
        assert_eq!(normalize_handle("  @alice  "), "alice");
        assert_eq!(normalize_handle("@alice"), "alice");
        // Only a single leading @ is stripped
        assert_eq!(normalize_handle("@@alice"), "@alice");
    }

    /// One known user with a fixed single page of tweets.
    struct SingleUserProvider;

    #[async_trait]
    impl TimelineProvider for SingleUserProvider {
        async fn user_by_username(&self, username: &str) -> Result<User, ApiError> {
            if username == "alice" {
                Ok(User {
                    id: "1".to_string(),
                    name: "Alice".to_string(),
                    username: "alice".to_string(),
                    extra: serde_json::Map::new(),
                })
            } else {
                Err(ApiError::UserNotFound {
                    username: username.to_string(),
                })
            }
        }

        async fn timeline_page(
            &self,
            user_id: &str,
            _pagination_token: Option<&str>,
        ) -> Result<TimelinePage, ApiError> {
            assert_eq!(user_id, "1");
            Ok(TimelinePage {
                tweets: ["10", "11", "12"]
                    .iter()
                    .map(|id| Tweet {
                        id: id.to_string(),
                        text: format!("tweet {}", id),
                        extra: serde_json::Map::new(),
                    })
                    .collect(),
                next_token: None,
            })
        }
    }

    #[tokio::test]
    async fn known_handle_collects_profile_and_tweets() {
        let archive = collect_handle(&SingleUserProvider, "alice").await.unwrap();
        assert_eq!(archive.user.username, "alice");
        assert_eq!(archive.tweets.len(), 3);
        assert_eq!(archive.tweets[0].id, "10");
    }

    #[tokio::test]
    async fn unknown_handle_reports_identity_not_found_verbatim() {
        let err = collect_handle(&SingleUserProvider, "doesnotexist")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The user (@doesnotexist) was not found."
        );
    }
}
