use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod fields;
pub mod models;
pub mod timeline;

pub use client::Client;
pub use error::ApiError;
pub use models::{TimelineArchive, TimelinePage, Tweet, User};

/// Read-only access to a user's profile and post history.
///
/// [`Client`] implements this against the Twitter v2 API; tests substitute
/// in-memory fakes. `timeline_page` is the explicit "fetch next page"
/// operation of cursor-based pagination: each call returns one page of
/// tweets plus the cursor for the next one, until the cursor comes back
/// `None`.
#[async_trait]
pub trait TimelineProvider: Send + Sync {
    /// Resolve a handle to a user profile.
    async fn user_by_username(&self, username: &str) -> Result<User, ApiError>;

    /// Fetch one page of the user's timeline, newest first, following
    /// `pagination_token` from the previous page (or `None` for the first).
    async fn timeline_page(
        &self,
        user_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<TimelinePage, ApiError>;
}
