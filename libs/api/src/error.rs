use thiserror::Error;

/// Errors returned by the Twitter v2 API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The handle did not resolve to any user. The message carries the
    /// attempted handle verbatim so the operator can see what was looked up.
    #[error("The user (@{username}) was not found.")]
    UserNotFound { username: String },

    /// Transport-level failure (connection, TLS, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The access token could not be used as an HTTP header value
    #[error("access token is not a valid header value")]
    InvalidToken,
}
