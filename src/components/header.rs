//! Top bar with the signed-in user and logout.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::format;

/// Header for the dashboard shell.
///
/// Logout resets the session (the save hook clears the stored record) and
/// hard-navigates to the login page for a clean start.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || session.get().session.display_name();
    let avatar = move || format::initial(&user_name());

    let on_logout = move |_| {
        session.update(|state| state.session.logout());
        #[cfg(feature = "csr")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="header">
            <span class="header__spacer"></span>
            <span class="header__avatar">{avatar}</span>
            <span class="header__user">{user_name}</span>
            <button class="btn header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
