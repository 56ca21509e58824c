//! File manager for incident attachments: upload, rename, download, delete.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::{ApiError, Gateway};
use crate::net::types::{Attachment, AttachmentPayload, Envelope, Incident};
use crate::state::notices::NoticeState;
use crate::util::download;
use crate::util::format;

type AttachmentList = LocalResource<Result<Envelope<Vec<Attachment>>, ApiError>>;
type IncidentList = LocalResource<Result<Envelope<Vec<Incident>>, ApiError>>;

#[component]
pub fn FilesPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let search = RwSignal::new(String::new());

    let attachments: AttachmentList =
        LocalResource::new(move || async move { api::get_attachments(gw).await });
    let incidents: IncidentList =
        LocalResource::new(move || async move { api::get_incidents(gw).await });

    let show_upload = RwSignal::new(false);
    let upload_choice = RwSignal::new(String::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let renaming = RwSignal::new(None::<Attachment>);
    let rename_value = RwSignal::new(String::new());

    let pending_delete = RwSignal::new(None::<Attachment>);

    let open_upload = move |_| {
        upload_choice.set(String::new());
        show_upload.set(true);
    };

    let submit_upload = Callback::new(move |()| {
        let Ok(incident_id) = upload_choice.get_untracked().parse::<i64>() else {
            notices.update(|n| n.error("Choose an incident.".to_owned()));
            return;
        };
        #[cfg(feature = "csr")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.item(0)) else {
                notices.update(|n| n.error("Choose a file to upload.".to_owned()));
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            if form
                .append_with_blob_and_filename("file", &file, &file.name())
                .is_err()
                || form
                    .append_with_str("incident_id", &incident_id.to_string())
                    .is_err()
            {
                notices.update(|n| n.error("Could not prepare the upload.".to_owned()));
                return;
            }
            leptos::task::spawn_local(async move {
                match api::upload_incident(gw, &form).await {
                    Ok(env) => {
                        notices.update(|n| n.success(env.detail));
                        show_upload.set(false);
                        attachments.refetch();
                    }
                    Err(e) if e.is_session_expired() => {}
                    Err(e) => notices.update(|n| n.error(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = incident_id;
        }
    });

    let open_rename = Callback::new(move |att: Attachment| {
        rename_value.set(format::basename(&att.attachment_path).to_owned());
        renaming.set(Some(att));
    });

    let submit_rename = Callback::new(move |()| {
        let Some(att) = renaming.get_untracked() else {
            return;
        };
        let new_name = rename_value.get_untracked().trim().to_owned();
        if new_name.is_empty() {
            notices.update(|n| n.error("File name cannot be empty.".to_owned()));
            return;
        }
        // Swap the final path segment, keep any directory prefix.
        let path = match att.attachment_path.rfind('/') {
            Some(idx) => format!("{}/{}", &att.attachment_path[..idx], new_name),
            None => new_name,
        };
        let payload = AttachmentPayload {
            incident_id: att.incident_id,
            attachment_path: path,
        };
        leptos::task::spawn_local(async move {
            match api::update_attachment(gw, att.id, &payload).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    renaming.set(None);
                    attachments.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
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

    let request_delete = Callback::new(move |att: Attachment| {
        pending_delete.set(Some(att));
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(att) = pending_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_attachment(gw, att.id).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    attachments.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
            pending_delete.set(None);
        });
    });

    view! {
        <Shell>
            <div class="page files">
                <header class="page__header">
                    <h1>"Files"</h1>
                    <div class="page__tools">
                        <input
                            class="page__search"
                            type="search"
                            placeholder="Search files..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=open_upload>
                            "+ Upload file"
                        </button>
                    </div>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading files..."</p> }>
                    {move || {
                        let titles = incidents
                            .get()
                            .and_then(Result::ok)
                            .map(|env| {
                                env.data
                                    .into_iter()
                                    .map(|i| (i.id, i.title))
                                    .collect::<HashMap<_, _>>()
                            })
                            .unwrap_or_default();
                        attachments
                            .get()
                            .map(|result| match result {
                                Ok(env) => {
                                    let needle = search.get().trim().to_lowercase();
                                    let rows = env
                                        .data
                                        .into_iter()
                                        .filter(|att| {
                                            let title = titles
                                                .get(&att.incident_id)
                                                .map(|t| t.to_lowercase())
                                                .unwrap_or_default();
                                            needle.is_empty()
                                                || format::basename(&att.attachment_path)
                                                    .to_lowercase()
                                                    .contains(&needle)
                                                || title.contains(&needle)
                                        })
                                        .collect::<Vec<_>>();
                                    if rows.is_empty() {
                                        view! { <p class="page__empty">"No files match."</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"File"</th>
                                                        <th>"Incident"</th>
                                                        <th>"Uploaded"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {rows
                                                        .into_iter()
                                                        .map(|att| {
                                                            let incident_title = titles
                                                                .get(&att.incident_id)
                                                                .cloned()
                                                                .unwrap_or_else(|| {
                                                                    format!("incident {}", att.incident_id)
                                                                });
                                                            view! {
                                                                <FileRow
                                                                    attachment=att
                                                                    incident_title=incident_title
                                                                    on_download=download_file
                                                                    on_rename=open_rename
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

                <Show when=move || show_upload.get()>
                    <UploadDialog
                        incidents=incidents
                        choice=upload_choice
                        file_input=file_input
                        on_cancel=Callback::new(move |()| show_upload.set(false))
                        on_submit=submit_upload
                    />
                </Show>

                {move || {
                    renaming
                        .get()
                        .map(|_| {
                            view! {
                                <RenameDialog
                                    value=rename_value
                                    on_cancel=Callback::new(move |()| renaming.set(None))
                                    on_submit=submit_rename
                                />
                            }
                        })
                }}

                {move || {
                    pending_delete
                        .get()
                        .map(|att| {
                            view! {
                                <ConfirmDialog
                                    title="Delete file"
                                    message=format!(
                                        "Delete {}? The file is removed from storage.",
                                        format::basename(&att.attachment_path),
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

#[component]
fn FileRow(
    attachment: Attachment,
    incident_title: String,
    on_download: Callback<String>,
    on_rename: Callback<Attachment>,
    on_delete: Callback<Attachment>,
) -> impl IntoView {
    let name = format::basename(&attachment.attachment_path).to_owned();
    let uploaded = format::date_prefix(&attachment.created_at).to_owned();
    let download_path = attachment.attachment_path.clone();
    let rename_target = attachment.clone();
    let delete_target = attachment.clone();

    view! {
        <tr class="table__row">
            <td class="file-list__name">{name}</td>
            <td>{incident_title}</td>
            <td>{uploaded}</td>
            <td class="table__actions">
                <button
                    class="btn btn--small"
                    on:click=move |_| on_download.run(download_path.clone())
                >
                    "Download"
                </button>
                <button class="btn btn--small" on:click=move |_| on_rename.run(rename_target.clone())>
                    "Rename"
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

#[component]
fn UploadDialog(
    incidents: IncidentList,
    choice: RwSignal<String>,
    file_input: NodeRef<leptos::html::Input>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Upload file"</h2>
                <label class="dialog__label">
                    "Incident"
                    <select
                        class="dialog__input"
                        on:change=move |ev| choice.set(event_target_value(&ev))
                    >
                        <option value="" disabled selected=move || choice.get().is_empty()>
                            "Choose an incident"
                        </option>
                        {move || {
                            let current = choice.get();
                            incidents
                                .get()
                                .and_then(Result::ok)
                                .map(|env| {
                                    env.data
                                        .into_iter()
                                        .map(|incident| {
                                            let value = incident.id.to_string();
                                            let selected = value == current;
                                            view! {
                                                <option value=value.clone() selected=selected>
                                                    {incident.title}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "File"
                    <input class="dialog__input" type="file" node_ref=file_input/>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Upload"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RenameDialog(
    value: RwSignal<String>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Rename file"</h2>
                <label class="dialog__label">
                    "File name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                on_submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Rename"
                    </button>
                </div>
            </div>
        </div>
    }
}
