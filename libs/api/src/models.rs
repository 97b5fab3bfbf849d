//! Wire and artifact models for the Twitter v2 API.
//!
//! `User` and `Tweet` pin down only the identifying fields the tool's logic
//! needs; everything else the provider returns rides along in the flattened
//! `extra` map and round-trips through serialization untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resolved user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Stable entity id
    pub id: String,
    /// Display name
    pub name: String,
    /// Handle, without the `@`
    pub username: String,
    /// Remaining provider-defined profile fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One post record, shaped by the requested field lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    /// Remaining provider-defined tweet fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of a user's timeline plus the cursor for the next page.
#[derive(Debug, Clone, Default)]
pub struct TimelinePage {
    /// Tweets in provider-emitted order
    pub tweets: Vec<Tweet>,
    /// Cursor for the next page; `None` when the stream is exhausted
    pub next_token: Option<String>,
}

/// The artifact written at the end of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineArchive {
    /// Profile of the archived user
    pub user: User,
    /// Full timeline, in the order the provider emitted it
    pub tweets: Vec<Tweet>,
}

/// Envelope of the user lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub data: Option<User>,
}

/// Envelope of the timeline endpoint.
#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    #[serde(default)]
    pub data: Option<Vec<Tweet>>,
    pub meta: Option<TimelineMeta>,
}

/// Pagination metadata attached to each timeline page.
#[derive(Debug, Deserialize)]
pub struct TimelineMeta {
    pub next_token: Option<String>,
    pub result_count: Option<u64>,
}
