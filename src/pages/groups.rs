//! Group list page.

use leptos::prelude::*;

#[component]
pub fn GroupsPage() -> impl IntoView {
    view! {
        <section class="page page--groups">
            <h1>"Groups"</h1>
        </section>
    }
}
