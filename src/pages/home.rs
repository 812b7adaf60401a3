//! Authenticated landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <section class="page page--home">
            <h1>"Balances"</h1>
            <p>{greeting}</p>
        </section>
    }
}
