//! Dashboard chrome wrapping every protected page.

use leptos::prelude::*;

use crate::components::guard::use_session_guard;
use crate::components::header::Header;
use crate::components::notices::NoticeStack;
use crate::components::sidebar::Sidebar;

/// Sidebar + header + content layout for signed-in pages.
///
/// Installs the session guard, so any page wrapped in the shell leaves
/// for the login page the moment the session goes away.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    use_session_guard();

    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell__main">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
            <NoticeStack/>
        </div>
    }
}
