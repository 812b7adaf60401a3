//! Top navigation between the signed-in sections.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::routes::{RouteName, href, with_base};
use crate::state::auth::AuthState;

const SECTIONS: [(RouteName, &str); 5] = [
    (RouteName::Home, "Home"),
    (RouteName::Friends, "Friends"),
    (RouteName::Groups, "Groups"),
    (RouteName::History, "History"),
    (RouteName::Profile, "Profile"),
];

/// `(href, label)` pairs with the router base applied.
fn section_links(base: &str) -> Vec<(String, &'static str)> {
    SECTIONS
        .iter()
        .filter_map(|(name, label)| href(*name, &[]).ok().map(|path| (with_base(base, &path), *label)))
        .collect()
}

/// Section links, hidden until a user is signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = section_links(&expect_context::<AuthConfig>().base_path);

    view! {
        <Show when=move || auth.get().is_signed_in()>
            <nav class="nav-bar">
                {links
                    .iter()
                    .cloned()
                    .map(|(path, label)| view! { <a class="nav-bar__link" href=path>{label}</a> })
                    .collect_view()}
            </nav>
        </Show>
    }
}
