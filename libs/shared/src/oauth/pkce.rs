//! PKCE (Proof Key for Code Exchange) implementation
//!
//! This module implements RFC 7636 PKCE for the OAuth 2.0 authorization code
//! flow. PKCE binds the authorization code to a locally-held secret so an
//! intercepted code alone cannot be redeemed.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// PKCE challenge pair containing the verifier and challenge
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    /// The verifier string (stored client-side, sent during token exchange)
    pub verifier: String,
    /// The challenge string (sent during the authorization request)
    pub challenge: String,
}

impl PkceChallenge {
    /// Generate a new PKCE challenge pair
    ///
    /// Creates a cryptographically random 32-byte verifier and computes
    /// the SHA256 hash as the challenge (S256 method).
    pub fn generate() -> Self {
        let random_bytes: [u8; 32] = rand::random();
        let verifier = URL_SAFE_NO_PAD.encode(random_bytes);

        let mut hasher = Sha256::new();
        hasher.update(verifier.as_bytes());
        let challenge = URL_SAFE_NO_PAD.encode(hasher.finalize());

        Self {
            verifier,
            challenge,
        }
    }

    /// Get the code challenge method (always S256)
    pub fn challenge_method() -> &'static str {
        "S256"
    }
}

/// Generate a random anti-forgery state token
///
/// The state is echoed back through the provider's redirect and must match
/// the pending session exactly, proving the callback corresponds to the
/// request that initiated it.
pub fn generate_state() -> String {
    let random_bytes: [u8; 32] = rand::random();
    URL_SAFE_NO_PAD.encode(random_bytes)
}
