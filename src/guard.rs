//! Navigation guard deciding whether a route change may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation. Protected routes need a signed-in user;
//! signed-in users have no business on the login screen. Everything else
//! passes through untouched, including paths the table does not know.
//!
//! The login check compares the exact path (query and fragment aside), so a
//! signed-in user on `/login/` is let through to the login view rather than
//! sent home. Route matching itself tolerates the trailing slash.
//!
//! ERROR HANDLING
//! ==============
//! The guard never fails. A session lookup error is logged and treated as
//! "no user", which is how the auth SDK itself reports a failed lookup.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::SessionSource;
use crate::net::types::User;
use crate::routes::{self, HOME_PATH, LOGIN_PATH};

/// Outcome of a guarded navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Proceed,
    Redirect(&'static str),
}

impl NavDecision {
    /// What a `next`-style continuation expects: `None` to proceed.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Navigation target as seen by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target<'a> {
    pub path: &'a str,
    pub requires_auth: bool,
}

impl<'a> Target<'a> {
    /// Look `path` up in the route table. Unmatched paths are public.
    pub fn resolve(path: &'a str) -> Self {
        Self { path, requires_auth: routes::requires_auth(path) }
    }
}

/// Three-way gate decision.
pub fn decide(target: &Target<'_>, user: Option<&User>) -> NavDecision {
    if target.requires_auth && user.is_none() {
        NavDecision::Redirect(LOGIN_PATH)
    } else if routes::strip_query(target.path) == LOGIN_PATH && user.is_some() {
        NavDecision::Redirect(HOME_PATH)
    } else {
        NavDecision::Proceed
    }
}

/// Ask `session` for the current user; failures count as signed out.
pub async fn lookup_user<S: SessionSource>(session: &S) -> Option<User> {
    match session.current_user().await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("session lookup failed, treating as signed out: {e}");
            None
        }
    }
}

/// Resolve `to`, query the session once, and decide.
pub async fn check<S: SessionSource>(to: &str, session: &S) -> NavDecision {
    let user = lookup_user(session).await;
    let decision = decide(&Target::resolve(to), user.as_ref());
    log::debug!("guard {to}: {decision:?}");
    decision
}

/// `beforeEach`-style hook: `next(None)` proceeds, `next(Some(path))`
/// redirects.
pub async fn before_each<S, N>(to: &str, from: Option<&str>, session: &S, next: N)
where
    S: SessionSource,
    N: FnOnce(Option<&'static str>),
{
    log::trace!("navigation {} -> {to}", from.unwrap_or("<initial>"));
    next(check(to, session).await.redirect_target());
}
