//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the navigation gate after every session lookup and read by
//! identity-aware pages. It mirrors the backend's answer; it is never used
//! to skip a lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Provided to the component tree as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Mark a lookup as in flight, keeping the last known user.
    pub fn begin_lookup(&mut self) {
        self.loading = true;
    }

    /// Record the result of a finished lookup.
    pub fn finish_lookup(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
