//! The pending authorization session and token exchange

use super::config::OAuthConfig;
use super::error::{OAuthError, OAuthResult};
use super::pkce::{PkceChallenge, generate_state};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// OAuth token response from the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token for API requests
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Scopes granted by the provider
    pub scope: Option<String>,
    /// Refresh token, present when offline access was requested
    pub refresh_token: Option<String>,
}

/// The one pending authorization session for this process.
///
/// Holds the authorization URL shown to the operator together with the PKCE
/// verifier and anti-forgery state that back it. [`AuthSession::exchange_code`]
/// takes the session by value: redeeming it a second time is a compile error,
/// which matches the single-use nature of authorization codes.
#[derive(Debug)]
pub struct AuthSession {
    auth_url: String,
    code_verifier: String,
    state: String,
}

impl AuthSession {
    /// Generate a fresh session: PKCE challenge, state token, and the full
    /// authorization URL for the operator's browser.
    pub fn generate(config: &OAuthConfig) -> Self {
        let pkce = PkceChallenge::generate();
        let state = generate_state();

        let auth_url = format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method={}",
            config.auth_url,
            urlencoding::encode(&config.client_id),
            urlencoding::encode(&config.redirect_url),
            urlencoding::encode(&config.scopes_string()),
            urlencoding::encode(&state),
            urlencoding::encode(&pkce.challenge),
            PkceChallenge::challenge_method(),
        );

        Self {
            auth_url,
            code_verifier: pkce.verifier,
            state,
        }
    }

    /// The authorization URL the operator must visit.
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// The anti-forgery state token the callback must echo back.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Exchange a validated authorization code for tokens, consuming the
    /// session. A single attempt is authoritative; failures are not retried.
    pub async fn exchange_code(self, config: &OAuthConfig, code: &str) -> OAuthResult<TokenResponse> {
        debug!("exchanging authorization code at {}", config.token_url);

        let client = reqwest::Client::new();
        let response = client
            .post(&config.token_url)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", config.client_id.as_str()),
                ("redirect_uri", config.redirect_url.as_str()),
                ("code_verifier", self.code_verifier.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(OAuthError::token_exchange_failed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response.json::<TokenResponse>().await.map_err(|e| {
            OAuthError::token_exchange_failed(format!("Failed to parse token response: {}", e))
        })
    }
}
