//! Application root: shared state, session restore and persistence, and
//! the route table.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::http::Gateway;
use crate::pages::{
    catalogs::CatalogsPage, files::FilesPage, incident_detail::IncidentDetailPage,
    incidents::IncidentsPage, login::LoginPage, overview::OverviewPage, users::UsersPage,
};
use crate::state::{notices::NoticeState, session::SessionState};
use crate::util::storage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(session);
    provide_context(notices);
    provide_context(Gateway::new(session));

    // Restore the stored session first. The state starts in `loading`, so
    // the route guards hold off until this has run.
    Effect::new(move || {
        if session.get_untracked().loading {
            session.update(|state| state.finish_restore(storage::load_session()));
        }
    });

    // Persist every change after the restore has settled. Logout clears
    // the stored record because `save_session` removes signed-out state.
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        storage::save_session(&state.session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/incident-desk.css"/>
        <Title text="Incident Desk"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=OverviewPage/>
                <Route path=StaticSegment("incidents") view=IncidentsPage/>
                <Route
                    path=(StaticSegment("incidents"), ParamSegment("id"))
                    view=IncidentDetailPage
                />
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("files") view=FilesPage/>
                <Route path=StaticSegment("catalogs") view=CatalogsPage/>
            </Routes>
        </Router>
    }
}
