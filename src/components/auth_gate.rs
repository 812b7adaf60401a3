//! Route gate running the navigation guard on every location change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `<Routes>`. Each pathname change triggers one session lookup; the
//! routed view renders only after the guard has cleared that exact path.
//! Redirects replace the history entry so "back" does not bounce through
//! the guarded page. The router reports pathnames with its base still in
//! front; the guard sees them with the base removed.
//!
//! TRADE-OFFS
//! ==========
//! Lookups are never cancelled. A result arriving after the user already
//! navigated elsewhere is dropped whole, both the redirect and the user it
//! carried, by comparing navigation generations.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AuthConfig;
use crate::net::api::{AuthError, BrowserSession, SessionSource};
use crate::net::types::User;
use crate::routes;
use crate::state::auth::AuthState;

/// What the gate does once a guard result comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GateStep {
    /// A newer navigation started meanwhile; touch nothing.
    Stale,
    /// Render the routed view for this pathname.
    Clear(String),
    /// Replace the current entry with this app path.
    Redirect(&'static str),
}

/// Turn a guard continuation argument into a gate step.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn settle(issued: u64, latest: u64, pathname: String, redirect: Option<&'static str>) -> GateStep {
    if issued != latest {
        return GateStep::Stale;
    }
    match redirect {
        None => GateStep::Clear(pathname),
        Some(path) => GateStep::Redirect(path),
    }
}

/// Whether the routed view may render for `pathname`.
pub(crate) fn is_cleared(cleared: Option<&str>, pathname: &str) -> bool {
    cleared == Some(pathname)
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Session source that remembers the user it fetched, so the gate can
/// publish it only if the navigation is still current.
pub(crate) struct RecordingSession<S> {
    inner: S,
    fetched: RefCell<Option<User>>,
}

impl<S> RecordingSession<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, fetched: RefCell::new(None) }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) fn take_user(&self) -> Option<User> {
        self.fetched.borrow_mut().take()
    }
}

impl<S: SessionSource> SessionSource for RecordingSession<S> {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let result = self.inner.current_user().await;
        *self.fetched.borrow_mut() = result.as_ref().ok().cloned().flatten();
        result
    }
}

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AuthConfig>();
    let location = use_location();
    let navigate = use_navigate();

    // Full pathname the guard has let through; views render only while it matches.
    let cleared = RwSignal::new(None::<String>);
    let generation = StoredValue::new(0_u64);
    let previous = StoredValue::new(None::<String>);

    Effect::new(move || {
        let pathname = location.pathname.get();
        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();
        let Some(to) = routes::strip_base(&config.base_path, &pathname).map(str::to_owned) else {
            log::debug!("{pathname} is outside the router base, not guarded");
            cleared.set(Some(pathname));
            return;
        };
        let from = previous.get_value();
        previous.set_value(Some(to.clone()));
        auth.update(AuthState::begin_lookup);

        let session = RecordingSession::new(BrowserSession::new(config.backend.clone()));
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::guard::before_each(&to, from.as_deref(), &session, |redirect| {
                    match settle(issued, generation.get_value(), pathname, redirect) {
                        GateStep::Stale => log::debug!("dropping stale guard result for {to}"),
                        GateStep::Clear(path) => {
                            auth.update(|s| s.finish_lookup(session.take_user()));
                            cleared.set(Some(path));
                        }
                        GateStep::Redirect(path) => {
                            auth.update(|s| s.finish_lookup(session.take_user()));
                            navigate(path, redirect_options());
                        }
                    }
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, from, issued, session, to);
        }
    });

    view! {
        <Show
            when=move || is_cleared(cleared.get().as_deref(), &location.pathname.get())
            fallback=|| view! { <p class="route-pending">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
