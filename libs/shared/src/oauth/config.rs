//! OAuth configuration types

/// Twitter's OAuth 2.0 authorization endpoint.
pub const TWITTER_AUTH_URL: &str = "https://twitter.com/i/oauth2/authorize";

/// Twitter's OAuth 2.0 token endpoint.
pub const TWITTER_TOKEN_URL: &str = "https://api.twitter.com/2/oauth2/token";

/// Configuration for an OAuth 2.0 provider
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret, used for HTTP Basic client authentication
    /// during token exchange
    pub client_secret: String,
    /// Authorization endpoint URL
    pub auth_url: String,
    /// Token exchange endpoint URL
    pub token_url: String,
    /// Redirect URI for the authorization callback
    pub redirect_url: String,
    /// Scopes to request
    pub scopes: Vec<String>,
}

impl OAuthConfig {
    /// Create a new OAuth configuration
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_url: impl Into<String>,
        token_url: impl Into<String>,
        redirect_url: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_url: auth_url.into(),
            token_url: token_url.into(),
            redirect_url: redirect_url.into(),
            scopes,
        }
    }

    /// Configuration for Twitter with the read-only scopes this tool needs.
    pub fn twitter(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self::new(
            client_id,
            client_secret,
            TWITTER_AUTH_URL,
            TWITTER_TOKEN_URL,
            redirect_url,
            vec!["users.read".to_string(), "tweet.read".to_string()],
        )
    }

    /// Get the scopes as a space-separated string
    pub fn scopes_string(&self) -> String {
        self.scopes.join(" ")
    }
}
