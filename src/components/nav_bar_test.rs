use super::*;

#[test]
fn links_without_base_are_app_paths() {
    let links = section_links("");
    assert_eq!(links.len(), 5);
    assert_eq!(links[0], ("/".to_owned(), "Home"));
    assert_eq!(links[1], ("/friends".to_owned(), "Friends"));
}

#[test]
fn links_carry_router_base() {
    let hrefs: Vec<_> = section_links("/app").into_iter().map(|(href, _)| href).collect();
    assert_eq!(hrefs, vec!["/app/", "/app/friends", "/app/groups", "/app/history", "/app/profile"]);
}
