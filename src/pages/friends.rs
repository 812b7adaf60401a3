use leptos::prelude::*;

#[component]
pub fn FriendsPage() -> impl IntoView {
    view! {
        <section class="page page--friends">
            <h1>"Friends"</h1>
        </section>
    }
}
