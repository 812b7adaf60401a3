//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{auth_gate::AuthGate, nav_bar::NavBar};
use crate::config::AuthConfig;
use crate::pages::{
    friends::FriendsPage, group_detail::GroupDetailPage, groups::GroupsPage, history::HistoryPage, home::HomePage,
    login::LoginPage, profile::ProfilePage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config and auth state as context and mounts the route table
/// behind the auth gate. Paths mirror `routes::ROUTES`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("auth config invalid, session lookups disabled: {e}");
        AuthConfig::default()
    });
    let base = config.base_path.clone();

    provide_context(config);
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/tabs-client.css"/>
        <Title text="Tabs"/>

        <Router base=base>
            <NavBar/>
            <AuthGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("friends") view=FriendsPage/>
                    <Route path=StaticSegment("groups") view=GroupsPage/>
                    <Route path=(StaticSegment("groups"), ParamSegment("id")) view=GroupDetailPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </AuthGate>
        </Router>
    }
}
