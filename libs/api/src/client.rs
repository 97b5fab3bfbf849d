//! Authenticated Twitter v2 API client
//!
//! Holds a bearer token obtained from the OAuth flow and implements
//! [`TimelineProvider`] against the real API.

use crate::TimelineProvider;
use crate::error::ApiError;
use crate::fields::{
    MEDIA_FIELDS, PLACE_FIELDS, POLL_FIELDS, TIMELINE_EXPANSIONS, TWEET_FIELDS, USER_EXPANSIONS,
    USER_FIELDS,
};
use crate::models::{TimelinePage, TimelineResponse, User, UserResponse};
use async_trait::async_trait;
use reqwest::{Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tweetvault_shared::oauth::TokenResponse;

/// Default API endpoint.
pub const API_BASE_URL: &str = "https://api.twitter.com";

/// Provider's per-page maximum for timeline requests.
pub const MAX_PAGE_SIZE: &str = "100";

/// Client for the Twitter v2 read-only endpoints
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new client from a bearer access token
    pub fn new(access_token: &str) -> Result<Self, ApiError> {
        Self::with_base_url(access_token, API_BASE_URL)
    }

    /// Create a client against a non-default endpoint (used by tests)
    pub fn with_base_url(access_token: &str, base_url: &str) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|_| ApiError::InvalidToken)?,
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("tweetvault/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from a token-exchange response
    pub fn from_token(token: &TokenResponse) -> Result<Self, ApiError> {
        Self::new(&token.access_token)
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api { status, message })
        }
    }
}

#[async_trait]
impl TimelineProvider for Client {
    async fn user_by_username(&self, username: &str) -> Result<User, ApiError> {
        let url = format!(
            "{}/2/users/by/username/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("expansions", USER_EXPANSIONS),
                ("tweet.fields", TWEET_FIELDS),
                ("user.fields", USER_FIELDS),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UserNotFound {
                username: username.to_string(),
            });
        }

        let lookup: UserResponse = self.handle_response(response).await?;

        // The API answers 200 with an empty envelope for unknown handles
        lookup.data.ok_or_else(|| ApiError::UserNotFound {
            username: username.to_string(),
        })
    }

    async fn timeline_page(
        &self,
        user_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<TimelinePage, ApiError> {
        let url = format!("{}/2/users/{}/tweets", self.base_url, user_id);
        let mut request = self.client.get(&url).query(&[
            ("max_results", MAX_PAGE_SIZE),
            ("expansions", TIMELINE_EXPANSIONS),
            ("media.fields", MEDIA_FIELDS),
            ("place.fields", PLACE_FIELDS),
            ("poll.fields", POLL_FIELDS),
            ("tweet.fields", TWEET_FIELDS),
            ("user.fields", USER_FIELDS),
        ]);
        if let Some(token) = pagination_token {
            request = request.query(&[("pagination_token", token)]);
        }

        let response = request.send().await?;
        let page: TimelineResponse = self.handle_response(response).await?;

        Ok(TimelinePage {
            tweets: page.data.unwrap_or_default(),
            next_token: page.meta.and_then(|m| m.next_token),
        })
    }
}
