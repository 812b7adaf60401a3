//! Login screen, the only public route.
//!
//! Sign-in itself is owned by the auth backend's hosted flow; once it
//! stores a session, navigating anywhere lets the gate pick it up.

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::routes::{HOME_PATH, with_base};

#[component]
pub fn LoginPage() -> impl IntoView {
    let home = with_base(&expect_context::<AuthConfig>().base_path, HOME_PATH);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tabs"</h1>
                <p class="login-card__subtitle">"Split expenses with friends and groups"</p>
                <a href=home class="login-button">"Continue"</a>
            </div>
        </div>
    }
}
