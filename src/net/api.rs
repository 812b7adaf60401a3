//! Current-user lookup against the auth backend.
//!
//! Client-side (hydrate): reads the persisted session from `localStorage`
//! and asks `GET /auth/v1/user` who the bearer token belongs to.
//! Server-side (SSR) and tests: always reports no user, since the session
//! lives only in the browser.
//!
//! ERROR HANDLING
//! ==============
//! An expired or revoked token (401/403) is a signed-out session, not an
//! error. Transport, status and decode failures surface as `AuthError` and
//! the caller decides what they mean for navigation.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::BackendConfig;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("session lookup failed: {0}")]
    Request(String),

    /// The backend answered with an unexpected status.
    #[error("session lookup returned status {0}")]
    Status(u16),

    /// The user payload could not be deserialized.
    #[error("session lookup payload invalid: {0}")]
    Decode(String),
}

/// Source of the current signed-in user.
///
/// Implementations are queried once per navigation; they must not cache.
#[allow(async_fn_in_trait)]
pub trait SessionSource {
    async fn current_user(&self) -> Result<Option<User>, AuthError>;
}

/// Session lookup backed by the browser's persisted auth session.
#[derive(Clone, Debug)]
pub struct BrowserSession {
    backend: Option<BackendConfig>,
}

impl BrowserSession {
    pub fn new(backend: Option<BackendConfig>) -> Self {
        Self { backend }
    }
}

impl SessionSource for BrowserSession {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let Some(backend) = self.backend.as_ref() else {
            return Ok(None);
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = read_stored_session(&backend.storage_key) else {
                return Ok(None);
            };
            let resp = gloo_net::http::Request::get(&backend.user_endpoint())
                .header("apikey", &backend.anon_key)
                .header("Authorization", &bearer(&session.access_token))
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            if !status_has_user(resp.status())? {
                return Ok(None);
            }
            let user = resp
                .json::<User>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(Some(user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = backend;
            Ok(None)
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_stored_session(key: &str) -> Option<super::types::StoredSession> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    super::types::parse_stored_session(&raw)
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a `/auth/v1/user` status to "token belongs to a user" or an error.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn status_has_user(status: u16) -> Result<bool, AuthError> {
    match status {
        200..=299 => Ok(true),
        401 | 403 => Ok(false),
        other => Err(AuthError::Status(other)),
    }
}
