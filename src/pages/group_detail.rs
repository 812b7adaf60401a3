//! Single-group page addressed by `/groups/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn GroupDetailPage() -> impl IntoView {
    let params = use_params_map();
    let group_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <section class="page page--group-detail">
            <h1>"Group"</h1>
            <p class="page__subtitle">{group_id}</p>
        </section>
    }
}
