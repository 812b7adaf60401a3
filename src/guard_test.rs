use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::net::api::AuthError;
use crate::routes::ROUTES;

fn user(id: &str) -> User {
    User { id: id.to_owned(), email: None, user_metadata: serde_json::Value::Null }
}

/// Fixed answer, counting how often it is asked.
struct FakeSession {
    user: Option<User>,
    calls: Cell<u32>,
}

impl FakeSession {
    fn signed_in() -> Self {
        Self { user: Some(user("1")), calls: Cell::new(0) }
    }

    fn signed_out() -> Self {
        Self { user: None, calls: Cell::new(0) }
    }
}

impl SessionSource for FakeSession {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.user.clone())
    }
}

struct FailingSession;

impl SessionSource for FailingSession {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Err(AuthError::Status(503))
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn every_protected_route_redirects_anonymous_to_login() {
    for def in ROUTES.iter().filter(|def| def.requires_auth) {
        let path = def.path.replace(":id", "1");
        let target = Target::resolve(&path);
        assert_eq!(decide(&target, None), NavDecision::Redirect(LOGIN_PATH), "path {path}");
    }
}

#[test]
fn login_redirects_signed_in_user_home() {
    let u = user("1");
    assert_eq!(decide(&Target::resolve("/login"), Some(&u)), NavDecision::Redirect(HOME_PATH));
    assert_eq!(decide(&Target::resolve("/login?next=%2F"), Some(&u)), NavDecision::Redirect(HOME_PATH));
}

#[test]
fn login_with_trailing_slash_is_not_the_login_path() {
    let u = user("1");
    assert_eq!(decide(&Target::resolve("/login/"), Some(&u)), NavDecision::Proceed);
}

#[test]
fn login_proceeds_when_anonymous() {
    assert_eq!(decide(&Target::resolve("/login"), None), NavDecision::Proceed);
}

#[test]
fn protected_routes_proceed_when_signed_in() {
    let u = user("1");
    for def in ROUTES.iter().filter(|def| def.requires_auth) {
        let path = def.path.replace(":id", "abc");
        assert_eq!(decide(&Target::resolve(&path), Some(&u)), NavDecision::Proceed, "path {path}");
    }
}

#[test]
fn unknown_paths_proceed_either_way() {
    let u = user("1");
    assert_eq!(decide(&Target::resolve("/nowhere"), None), NavDecision::Proceed);
    assert_eq!(decide(&Target::resolve("/nowhere"), Some(&u)), NavDecision::Proceed);
}

#[test]
fn decide_uses_flag_as_given() {
    let target = Target { path: "/custom", requires_auth: true };
    assert_eq!(decide(&target, None), NavDecision::Redirect(LOGIN_PATH));
}

#[test]
fn redirect_target_maps_to_next_argument() {
    assert_eq!(NavDecision::Proceed.redirect_target(), None);
    assert_eq!(NavDecision::Redirect("/login").redirect_target(), Some("/login"));
}

// =============================================================
// check / before_each
// =============================================================

#[test]
fn profile_without_user_redirects_to_login() {
    let session = FakeSession::signed_out();
    assert_eq!(block_on(check("/profile", &session)), NavDecision::Redirect("/login"));
}

#[test]
fn login_with_user_redirects_home() {
    let session = FakeSession::signed_in();
    assert_eq!(block_on(check("/login", &session)), NavDecision::Redirect("/"));
}

#[test]
fn group_detail_with_user_proceeds() {
    let session = FakeSession::signed_in();
    assert_eq!(block_on(check("/groups/42", &session)), NavDecision::Proceed);
}

#[test]
fn session_is_queried_on_every_navigation() {
    let session = FakeSession::signed_in();
    block_on(check("/", &session));
    block_on(check("/friends", &session));
    block_on(check("/login", &session));
    assert_eq!(session.calls.get(), 3);
}

#[test]
fn lookup_failure_counts_as_signed_out() {
    assert_eq!(block_on(check("/history", &FailingSession)), NavDecision::Redirect("/login"));
    assert_eq!(block_on(check("/login", &FailingSession)), NavDecision::Proceed);
}

#[test]
fn before_each_calls_next_once_with_redirect() {
    let session = FakeSession::signed_out();
    let seen = Cell::new(None);
    let calls = Cell::new(0);
    block_on(before_each("/groups", Some("/login"), &session, |target| {
        seen.set(target);
        calls.set(calls.get() + 1);
    }));
    assert_eq!(seen.get(), Some("/login"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn before_each_proceeds_with_no_argument() {
    let session = FakeSession::signed_in();
    let seen = Cell::new(Some("unset"));
    block_on(before_each("/groups/42", None, &session, |target| seen.set(target)));
    assert_eq!(seen.get(), None);
}

#[test]
fn base_prefixed_protected_path_redirects_after_stripping_base() {
    let session = FakeSession::signed_out();
    let to = crate::routes::strip_base("/app", "/app/profile").unwrap();
    assert_eq!(block_on(check(to, &session)), NavDecision::Redirect("/login"));
}

#[test]
fn relative_paths_never_match_a_protected_route() {
    let session = FakeSession::signed_out();
    assert_eq!(block_on(check("login", &session)), NavDecision::Proceed);
    let session = FakeSession::signed_in();
    assert_eq!(block_on(check("login", &session)), NavDecision::Proceed);
}
