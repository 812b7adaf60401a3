//! Auth-backend DTOs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in identity as reported by `GET /auth/v1/user`.
///
/// Only presence matters to the route guard; the remaining fields are for
/// views that display the account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form profile data set at sign-up (display name, avatar, ...).
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl User {
    /// Best label for the account: `user_metadata.full_name`, then email,
    /// then the raw id.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Session blob the auth SDK persists in `localStorage`.
///
/// Unknown fields (refresh token, expiry, cached user) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
}

/// Parse the persisted session value. Malformed or empty tokens count as
/// no session.
pub fn parse_stored_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.access_token.is_empty())
}
