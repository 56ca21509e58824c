//! Session-based route guards.
//!
//! Guards are plain effects re-run on every session change, so a logout
//! (manual or forced by the gateway) bounces the user immediately. Both
//! wait for rehydration: the persisted session is restored before either
//! decision is allowed to fire.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// True when a protected page must bounce to the login page.
pub fn needs_login(state: &SessionState) -> bool {
    !state.loading && !state.session.is_authenticated
}

/// True when the login page should hand a signed-in user to the overview.
pub fn already_signed_in(state: &SessionState) -> bool {
    !state.loading && state.session.is_authenticated
}

/// Redirect to `/login` whenever the session disappears. Installed by the
/// shell, so every protected page gets it.
pub fn use_session_guard() {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if needs_login(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Inverse guard for the login page.
pub fn use_guest_guard() {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if already_signed_in(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
