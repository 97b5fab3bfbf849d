//! OAuth 2.0 authorization code flow with PKCE
//!
//! Everything needed to get from "no credentials" to a bearer token for the
//! Twitter v2 API:
//!
//! - `config`: provider endpoints, client credentials, and scopes
//! - `pkce`: PKCE (Proof Key for Code Exchange) challenge generation
//! - `session`: the single pending authorization session and token exchange
//! - `error`: error types for OAuth operations
//!
//! A process runs exactly one [`AuthSession`]. The session is generated up
//! front, its URL is handed to the operator, and the session is consumed by
//! the token exchange; the type system enforces that a session cannot be
//! redeemed twice.

pub mod config;
pub mod error;
pub mod pkce;
pub mod session;

pub use config::OAuthConfig;
pub use error::{OAuthError, OAuthResult};
pub use pkce::{PkceChallenge, generate_state};
pub use session::{AuthSession, TokenResponse};
