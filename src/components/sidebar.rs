//! Left navigation for the dashboard shell.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar with one link per section; the active section is highlighted
/// from the current path.
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let link = move |href: &'static str, label: &'static str| {
        let class = move || {
            let path = pathname.get();
            let active = if href == "/" {
                path == "/"
            } else {
                path.starts_with(href)
            };
            if active {
                "sidebar__link sidebar__link--active"
            } else {
                "sidebar__link"
            }
        };
        view! {
            <a href=href class=class>
                {label}
            </a>
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Incident Desk"</div>
            {link("/", "Overview")}
            {link("/incidents", "Incidents")}
            {link("/users", "Users")}
            {link("/files", "Files")}
            {link("/catalogs", "Catalogs")}
        </nav>
    }
}
