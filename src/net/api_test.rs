use super::*;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("jwt.abc"), "Bearer jwt.abc");
}

#[test]
fn success_status_means_user_present() {
    assert!(status_has_user(200).unwrap());
}

#[test]
fn unauthorized_and_forbidden_mean_signed_out() {
    assert!(!status_has_user(401).unwrap());
    assert!(!status_has_user(403).unwrap());
}

#[test]
fn other_statuses_are_errors() {
    assert!(matches!(status_has_user(500), Err(AuthError::Status(500))));
    assert!(matches!(status_has_user(404), Err(AuthError::Status(404))));
}

#[test]
fn browser_session_without_backend_has_no_user() {
    let source = BrowserSession::new(None);
    assert!(futures::executor::block_on(source.current_user()).unwrap().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_outside_browser_has_no_user() {
    let backend = crate::config::AuthConfig::from_vars(Some("https://p.supabase.co"), Some("k"), None)
        .unwrap()
        .backend;
    let source = BrowserSession::new(backend);
    assert!(futures::executor::block_on(source.current_user()).unwrap().is_none());
}
