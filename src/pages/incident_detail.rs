//! Read-only incident view with its attachment list and downloads.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::Gateway;
use crate::state::notices::NoticeState;
use crate::util::download;
use crate::util::format;

#[component]
pub fn IncidentDetailPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let params = use_params_map();
    let incident_id = Memo::new(move |_| {
        params.read().get("id").and_then(|raw| raw.parse::<i64>().ok())
    });

    // None inside Ok means the route id did not parse.
    let incident = LocalResource::new(move || {
        let id = incident_id.get();
        async move {
            match id {
                Some(id) => api::get_incident_by_id(gw, id).await.map(Some),
                None => Ok(None),
            }
        }
    });
    let attachments = LocalResource::new(move || {
        let id = incident_id.get();
        async move {
            match id {
                Some(id) => api::get_attachments_by_incident(gw, id).await.map(|env| env.data),
                None => Ok(Vec::new()),
            }
        }
    });

    let download_file = Callback::new(move |path: String| {
        let filename = format::basename(&path).to_owned();
        leptos::task::spawn_local(async move {
            match api::download_incident(gw, &filename).await {
                Ok(bytes) => download::save_bytes(&filename, &bytes),
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
    });

    view! {
        <Shell>
            <div class="page incident-detail">
                <a class="page__back" href="/incidents">
                    "< Back to incidents"
                </a>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading incident..."</p> }>
                    {move || {
                        incident
                            .get()
                            .map(|result| match result {
                                Ok(Some(env)) => {
                                    let incident = env.data;
                                    let status = incident
                                        .status
                                        .as_ref()
                                        .map_or_else(
                                            || format!("status {}", incident.status_id),
                                            |s| s.name.clone(),
                                        );
                                    let reporter = incident
                                        .user
                                        .as_ref()
                                        .map_or_else(
                                            || format!("user {}", incident.user_id),
                                            |u| format!("{} {}", u.first_name, u.last_name),
                                        );
                                    let created = format::date_prefix(&incident.created_at)
                                        .to_owned();
                                    let updated = format::date_prefix(&incident.updated_at)
                                        .to_owned();
                                    let response = incident
                                        .response
                                        .clone()
                                        .filter(|r| !r.trim().is_empty());
                                    view! {
                                        <article class="incident-detail__card">
                                            <header class="incident-detail__header">
                                                <h1>{incident.title.clone()}</h1>
                                                <span class="badge">{status}</span>
                                            </header>
                                            <dl class="incident-detail__meta">
                                                <dt>"Reported by"</dt>
                                                <dd>{reporter}</dd>
                                                <dt>"Created"</dt>
                                                <dd>{created}</dd>
                                                <dt>"Updated"</dt>
                                                <dd>{updated}</dd>
                                            </dl>
                                            <section class="incident-detail__section">
                                                <h2>"Description"</h2>
                                                <p>{incident.description.clone()}</p>
                                            </section>
                                            <section class="incident-detail__section">
                                                <h2>"Response"</h2>
                                                {match response {
                                                    Some(text) => view! { <p>{text}</p> }.into_any(),
                                                    None => {
                                                        view! {
                                                            <p class="page__empty">"No response yet."</p>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </section>
                                        </article>
                                    }
                                        .into_any()
                                }
                                Ok(None) => {
                                    view! { <p class="page__error">"Unknown incident."</p> }
                                        .into_any()
                                }
                                Err(e) if e.is_session_expired() => ().into_any(),
                                Err(e) => {
                                    view! { <p class="page__error">{e.to_string()}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>

                <section class="incident-detail__files">
                    <h2>"Attachments"</h2>
                    <Suspense fallback=move || view! { <p class="page__loading">"Loading files..."</p> }>
                        {move || {
                            attachments
                                .get()
                                .map(|result| match result {
                                    Ok(files) if files.is_empty() => {
                                        view! { <p class="page__empty">"No files attached."</p> }
                                            .into_any()
                                    }
                                    Ok(files) => {
                                        view! {
                                            <ul class="file-list">
                                                {files
                                                    .into_iter()
                                                    .map(|file| {
                                                        let name = format::basename(&file.attachment_path)
                                                            .to_owned();
                                                        let path = file.attachment_path.clone();
                                                        view! {
                                                            <li class="file-list__item">
                                                                <span class="file-list__name">{name}</span>
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| download_file.run(path.clone())
                                                                >
                                                                    "Download"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                    Err(e) if e.is_session_expired() => ().into_any(),
                                    Err(e) => {
                                        view! { <p class="page__error">{e.to_string()}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </Shell>
    }
}
