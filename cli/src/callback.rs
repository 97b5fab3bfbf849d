//! Local callback listener for the OAuth redirect.
//!
//! Serves exactly one endpoint, `GET /`, and advances an explicit login
//! state machine:
//!
//! ```text
//! AwaitingCallback -> StateValidated -> TokenExchanged   (success)
//!                  \-> Rejected                          (failure)
//! ```
//!
//! The handler validates the redirect and answers the browser immediately;
//! the validated code is passed over a channel so the token exchange runs
//! after the response is on the wire. The listener accepts at most one
//! meaningful callback: anything arriving once the machine has left
//! `AwaitingCallback` gets a 400 and can never trigger a second exchange.
//! Recovery from a rejected first callback is deliberately unsupported:
//! the run ends and the operator starts over.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};
use tweetvault_shared::oauth::{AuthSession, OAuthConfig, OAuthError, TokenResponse};

/// Observable state of the one login attempt this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Listener is up, no redirect received yet
    AwaitingCallback,
    /// Redirect carried the expected state and a code; exchange pending
    StateValidated,
    /// Terminal success: the code was exchanged for a token
    TokenExchanged,
    /// Terminal failure: forged or malformed redirect, or exchange failed
    Rejected,
}

/// Query parameters of the provider's redirect
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("callback state token didn't match the pending session")]
    StateMismatch,

    #[error("callback carried no authorization code")]
    MissingCode,

    #[error("could not bind callback listener on port {port}: {source}")]
    Bind {
        port: u16,
        source: std::io::Error,
    },

    #[error("callback listener stopped before a callback arrived")]
    ListenerClosed,

    #[error(transparent)]
    Exchange(#[from] OAuthError),
}

/// Shared state handed to the axum handler.
#[derive(Clone)]
struct ListenerState {
    /// State token the redirect must echo
    expected_state: Arc<str>,
    login: Arc<Mutex<LoginState>>,
    /// Carries the validated code out of the handler, capacity 1
    code_tx: mpsc::Sender<Result<String, LoginError>>,
}

/// Check one callback request against the pending session's state token.
///
/// Request shape is rejected, never coerced: a state mismatch is a rejection
/// even when a code is present, and a missing code is a rejection even when
/// the state matches.
fn validate_callback(expected_state: &str, params: &CallbackParams) -> Result<String, LoginError> {
    if params.state.as_deref() != Some(expected_state) {
        return Err(LoginError::StateMismatch);
    }
    match params.code.as_deref() {
        Some(code) if !code.is_empty() => Ok(code.to_string()),
        _ => Err(LoginError::MissingCode),
    }
}

async fn handle_callback(
    State(state): State<ListenerState>,
    Query(params): Query<CallbackParams>,
) -> (StatusCode, &'static str) {
    let mut login = state.login.lock().await;

    if *login != LoginState::AwaitingCallback {
        // The one meaningful callback was already consumed
        warn!("ignoring extra callback in state {:?}", *login);
        return (StatusCode::BAD_REQUEST, "Login already completed");
    }

    match validate_callback(&state.expected_state, &params) {
        Ok(code) => {
            *login = LoginState::StateValidated;
            drop(login);
            debug!("callback state validated");
            // try_send cannot fail here: capacity 1, first send, receiver alive
            let _ = state.code_tx.try_send(Ok(code));
            (
                StatusCode::OK,
                "Successfully authenticated. Type username in the terminal.",
            )
        }
        Err(err) => {
            *login = LoginState::Rejected;
            drop(login);
            warn!("rejecting callback: {}", err);
            let _ = state.code_tx.try_send(Err(err));
            (StatusCode::BAD_REQUEST, "State token didn't match")
        }
    }
}

fn router(state: ListenerState) -> Router {
    Router::new().route("/", get(handle_callback)).with_state(state)
}

/// Run the listener until the login attempt resolves.
///
/// Binds the callback port, waits for the provider's redirect, then
/// exchanges the validated code for a token. Consumes the session, so the
/// process gets exactly one attempt. There is no timeout: an operator who
/// never authorizes leaves the process waiting, which is acceptable for a
/// single-operator, single-run tool.
pub async fn await_login(
    session: AuthSession,
    config: &OAuthConfig,
    port: u16,
) -> Result<TokenResponse, LoginError> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|source| LoginError::Bind { port, source })?;
    info!("callback listener on http://127.0.0.1:{}", port);

    let login = Arc::new(Mutex::new(LoginState::AwaitingCallback));
    let (code_tx, mut code_rx) = mpsc::channel(1);
    let app = router(ListenerState {
        expected_state: Arc::from(session.state()),
        login: Arc::clone(&login),
        code_tx,
    });

    // Graceful shutdown lets the in-flight response reach the browser
    // before the listener goes away.
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(err) = serve.await {
            warn!("callback listener error: {}", err);
        }
    });

    let outcome = match code_rx.recv().await {
        Some(Ok(code)) => {
            debug!("authorization code received, exchanging for a token");
            match session.exchange_code(config, &code).await {
                Ok(token) => {
                    *login.lock().await = LoginState::TokenExchanged;
                    info!("token exchange complete");
                    Ok(token)
                }
                Err(err) => {
                    *login.lock().await = LoginState::Rejected;
                    Err(err.into())
                }
            }
        }
        Some(Err(err)) => Err(err),
        None => Err(LoginError::ListenerClosed),
    };

    let _ = shutdown_tx.send(());
    let _ = server.await;
    outcome
}
