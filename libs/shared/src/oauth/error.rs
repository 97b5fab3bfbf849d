//! OAuth error types

use thiserror::Error;

/// Errors that can occur during OAuth operations
#[derive(Error, Debug)]
pub enum OAuthError {
    /// Token exchange failed. Authorization codes are single-use, so this is
    /// not retried: the provider may have rejected an expired or already
    /// consumed code, or the PKCE verifier did not match.
    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl OAuthError {
    /// Create a token exchange failed error
    pub fn token_exchange_failed(msg: impl Into<String>) -> Self {
        Self::TokenExchangeFailed(msg.into())
    }
}

/// Result type alias for OAuth operations
pub type OAuthResult<T> = Result<T, OAuthError>;
