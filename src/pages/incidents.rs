//! Incidents page: searchable table with create, edit, and delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::{ApiError, Gateway};
use crate::net::types::{Envelope, Incident, IncidentPayload, Status};
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;
use crate::util::format;

type IncidentList = LocalResource<Result<Envelope<Vec<Incident>>, ApiError>>;
type StatusList = LocalResource<Result<Envelope<Vec<Status>>, ApiError>>;

/// Incident list with search, an "only mine" filter, and the editor and
/// delete dialogs. Deleting an incident also removes its files server-side.
#[component]
pub fn IncidentsPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let search = RwSignal::new(String::new());
    let only_mine = RwSignal::new(false);

    let incidents: IncidentList = LocalResource::new(move || {
        let mine = only_mine.get();
        let user_id = session.get().session.user.as_ref().map(|u| u.id);
        async move {
            match (mine, user_id) {
                (true, Some(id)) => api::get_incidents_by_user(gw, id).await,
                _ => api::get_incidents(gw).await,
            }
        }
    });
    let statuses: StatusList =
        LocalResource::new(move || async move { api::get_statuses(gw).await });

    // Editor dialog state. `editing` is None for create.
    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let owner = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status_choice = RwSignal::new(String::new());
    let response = RwSignal::new(String::new());

    let pending_delete = RwSignal::new(None::<Incident>);

    let open_create = move |_| {
        editing.set(None);
        owner.set(None);
        title.set(String::new());
        description.set(String::new());
        status_choice.set(String::new());
        response.set(String::new());
        show_editor.set(true);
    };

    let open_edit = Callback::new(move |incident: Incident| {
        editing.set(Some(incident.id));
        owner.set(Some(incident.user_id));
        title.set(incident.title);
        description.set(incident.description);
        status_choice.set(incident.status_id.to_string());
        response.set(incident.response.unwrap_or_default());
        show_editor.set(true);
    });

    let close_editor = Callback::new(move |()| show_editor.set(false));

    let submit_editor = Callback::new(move |()| {
        let title_value = title.get_untracked().trim().to_owned();
        if title_value.is_empty() {
            notices.update(|n| n.error("Title is required.".to_owned()));
            return;
        }
        let Ok(status_id) = status_choice.get_untracked().parse::<i64>() else {
            notices.update(|n| n.error("Choose a status.".to_owned()));
            return;
        };
        // Edits keep the original reporter; new incidents are reported by
        // the signed-in user.
        let user_id = owner
            .get_untracked()
            .or_else(|| session.get_untracked().session.user.as_ref().map(|u| u.id));
        let Some(user_id) = user_id else {
            return;
        };
        let response_value = response.get_untracked().trim().to_owned();
        let payload = IncidentPayload {
            title: title_value,
            description: description.get_untracked().trim().to_owned(),
            status_id,
            user_id,
            response: if response_value.is_empty() {
                None
            } else {
                Some(response_value)
            },
        };
        let id = editing.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_incident(gw, id, &payload).await,
                None => api::create_incident(gw, &payload).await,
            };
            match result {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    show_editor.set(false);
                    incidents.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
    });

    let request_delete = Callback::new(move |incident: Incident| {
        pending_delete.set(Some(incident));
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(incident) = pending_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_incident(gw, incident.id).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    incidents.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
            pending_delete.set(None);
        });
    });

    view! {
        <Shell>
            <div class="page incidents">
                <header class="page__header">
                    <h1>"Incidents"</h1>
                    <div class="page__tools">
                        <input
                            class="page__search"
                            type="search"
                            placeholder="Search incidents..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <label class="page__filter">
                            <input
                                type="checkbox"
                                prop:checked=move || only_mine.get()
                                on:change=move |_| only_mine.update(|v| *v = !*v)
                            />
                            "Only mine"
                        </label>
                        <button class="btn btn--primary" on:click=open_create>
                            "+ New incident"
                        </button>
                    </div>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading incidents..."</p> }>
                    {move || {
                        incidents
                            .get()
                            .map(|result| match result {
                                Ok(env) => {
                                    let needle = search.get().trim().to_lowercase();
                                    let rows = env
                                        .data
                                        .into_iter()
                                        .filter(|i| row_matches(i, &needle))
                                        .collect::<Vec<_>>();
                                    if rows.is_empty() {
                                        view! { <p class="page__empty">"No incidents match."</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Title"</th>
                                                        <th>"Status"</th>
                                                        <th>"Reported by"</th>
                                                        <th>"Created"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {rows
                                                        .into_iter()
                                                        .map(|incident| {
                                                            view! {
                                                                <IncidentRow
                                                                    incident=incident
                                                                    on_edit=open_edit
                                                                    on_delete=request_delete
                                                                />
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
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

                <Show when=move || show_editor.get()>
                    <IncidentEditor
                        editing=editing
                        title=title
                        description=description
                        status_choice=status_choice
                        response=response
                        statuses=statuses
                        on_cancel=close_editor
                        on_submit=submit_editor
                    />
                </Show>

                {move || {
                    pending_delete
                        .get()
                        .map(|incident| {
                            view! {
                                <ConfirmDialog
                                    title="Delete incident"
                                    message=format!(
                                        "Delete \"{}\"? Its attachments go with it.",
                                        incident.title,
                                    )
                                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                                    on_confirm=confirm_delete
                                />
                            }
                        })
                }}
            </div>
        </Shell>
    }
}

fn row_matches(incident: &Incident, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let status = incident
        .status
        .as_ref()
        .map(|s| s.name.to_lowercase())
        .unwrap_or_default();
    let reporter = incident
        .user
        .as_ref()
        .map(|u| format!("{} {}", u.first_name, u.last_name).to_lowercase())
        .unwrap_or_default();
    incident.title.to_lowercase().contains(needle)
        || incident.description.to_lowercase().contains(needle)
        || status.contains(needle)
        || reporter.contains(needle)
}

/// One table row; actions hand the full record back to the page.
#[component]
fn IncidentRow(
    incident: Incident,
    on_edit: Callback<Incident>,
    on_delete: Callback<Incident>,
) -> impl IntoView {
    let status = incident
        .status
        .as_ref()
        .map_or_else(|| format!("status {}", incident.status_id), |s| s.name.clone());
    let reporter = incident
        .user
        .as_ref()
        .map_or_else(
            || format!("user {}", incident.user_id),
            |u| format!("{} {}", u.first_name, u.last_name),
        );
    let created = format::date_prefix(&incident.created_at).to_owned();
    let detail_href = format!("/incidents/{}", incident.id);
    let edit_target = incident.clone();
    let delete_target = incident.clone();

    view! {
        <tr class="table__row">
            <td>
                <a href=detail_href>{incident.title.clone()}</a>
            </td>
            <td>
                <span class="badge">{status}</span>
            </td>
            <td>{reporter}</td>
            <td>{created}</td>
            <td class="table__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| on_delete.run(delete_target.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Create/edit dialog. Status options come from the statuses endpoint.
#[component]
fn IncidentEditor(
    editing: RwSignal<Option<i64>>,
    title: RwSignal<String>,
    description: RwSignal<String>,
    status_choice: RwSignal<String>,
    response: RwSignal<String>,
    statuses: StatusList,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || if editing.get().is_some() { "Edit incident" } else { "New incident" }}
                </h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        on:change=move |ev| status_choice.set(event_target_value(&ev))
                    >
                        <option value="" disabled selected=move || status_choice.get().is_empty()>
                            "Choose a status"
                        </option>
                        {move || {
                            let current = status_choice.get();
                            statuses
                                .get()
                                .and_then(Result::ok)
                                .map(|env| {
                                    env.data
                                        .into_iter()
                                        .map(|s| {
                                            let value = s.id.to_string();
                                            let selected = value == current;
                                            view! {
                                                <option value=value.clone() selected=selected>
                                                    {s.name}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Response"
                    <textarea
                        class="dialog__input"
                        prop:value=move || response.get()
                        on:input=move |ev| response.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        {move || if editing.get().is_some() { "Save" } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
