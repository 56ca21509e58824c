//! Overview page: counts, incidents per status, and recent activity.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::Gateway;
use crate::util::format;

/// Landing page after sign-in. Everything here is read-only summary over
/// the list endpoints.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();

    let users = LocalResource::new(move || async move { api::get_users(gw).await });
    let incidents = LocalResource::new(move || async move { api::get_incidents(gw).await });
    let attachments = LocalResource::new(move || async move { api::get_attachments(gw).await });
    let statuses = LocalResource::new(move || async move { api::get_statuses(gw).await });

    view! {
        <Shell>
            <div class="page overview">
                <header class="page__header">
                    <h1>"Overview"</h1>
                </header>

                <div class="overview__cards">
                    <Suspense fallback=move || view! { <p class="page__loading">"Loading summary..."</p> }>
                        {move || {
                            let users = users.get().map(|r| r.ok().map(|e| e.data.len()));
                            let incidents = incidents.get().map(|r| r.ok().map(|e| e.data.len()));
                            let files = attachments.get().map(|r| r.ok().map(|e| e.data.len()));
                            match (users, incidents, files) {
                                (Some(u), Some(i), Some(f)) => {
                                    Some(view! {
                                        <MetricCard label="Users" value=u/>
                                        <MetricCard label="Incidents" value=i/>
                                        <MetricCard label="Files" value=f/>
                                    })
                                }
                                _ => None,
                            }
                        }}
                    </Suspense>
                </div>

                <section class="overview__section">
                    <h2>"Incidents by status"</h2>
                    <Suspense fallback=move || view! { <p class="page__loading">"Loading..."</p> }>
                        {move || {
                            let loaded = (
                                incidents.get().and_then(Result::ok),
                                statuses.get().and_then(Result::ok),
                            );
                            if let (Some(inc), Some(st)) = loaded {
                                let mut counts: HashMap<i64, usize> = HashMap::new();
                                for incident in &inc.data {
                                    *counts.entry(incident.status_id).or_insert(0) += 1;
                                }
                                let total = inc.data.len().max(1);
                                Some(
                                    st.data
                                        .into_iter()
                                        .map(|status| {
                                            let count = counts.get(&status.id).copied().unwrap_or(0);
                                            let pct = count * 100 / total;
                                            view! {
                                                <div class="overview__status-row">
                                                    <span class="overview__status-name">{status.name}</span>
                                                    <div class="overview__status-bar">
                                                        <div
                                                            class="overview__status-fill"
                                                            style:width=format!("{pct}%")
                                                        ></div>
                                                    </div>
                                                    <span class="overview__status-count">
                                                        {count.to_string()}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>(),
                                )
                            } else {
                                None
                            }
                        }}
                    </Suspense>
                </section>

                <section class="overview__section">
                    <h2>"Recent incidents"</h2>
                    <Suspense fallback=move || view! { <p class="page__loading">"Loading..."</p> }>
                        {move || {
                            incidents
                                .get()
                                .map(|result| match result {
                                    Ok(env) => {
                                        let mut list = env.data;
                                        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                                        list.truncate(3);
                                        if list.is_empty() {
                                            view! { <p class="page__empty">"No incidents yet."</p> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <ul class="overview__recent">
                                                    {list
                                                        .into_iter()
                                                        .map(|incident| {
                                                            let status = incident
                                                                .status
                                                                .as_ref()
                                                                .map_or_else(
                                                                    || format!("status {}", incident.status_id),
                                                                    |s| s.name.clone(),
                                                                );
                                                            let date = format::date_prefix(&incident.created_at)
                                                                .to_owned();
                                                            view! {
                                                                <li class="overview__recent-item">
                                                                    <a href=format!("/incidents/{}", incident.id)>
                                                                        {incident.title.clone()}
                                                                    </a>
                                                                    <span class="overview__recent-meta">
                                                                        {status} " \u{b7} " {date}
                                                                    </span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                                .into_any()
                                        }
                                    }
                                    Err(e) if e.is_session_expired() => ().into_any(),
                                    Err(e) => {
                                        view! { <p class="page__error">{e.to_string()}</p> }.into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </Shell>
    }
}

/// One headline number on the overview. `None` means the list failed to
/// load and the card shows a dash.
#[component]
fn MetricCard(label: &'static str, value: Option<usize>) -> impl IntoView {
    view! {
        <div class="overview__card">
            <span class="overview__card-value">
                {value.map_or_else(|| "-".to_owned(), |v| v.to_string())}
            </span>
            <span class="overview__card-label">{label}</span>
        </div>
    }
}
