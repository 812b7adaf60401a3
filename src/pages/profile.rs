//! Account page showing the signed-in identity.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.get().user.map(|u| u.display_name().to_owned()).unwrap_or_default();
    let email = move || auth.get().user.and_then(|u| u.email).unwrap_or_default();

    view! {
        <section class="page page--profile">
            <h1>"Profile"</h1>
            <p class="profile__name">{name}</p>
            <p class="profile__email">{email}</p>
        </section>
    }
}
