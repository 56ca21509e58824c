//! User administration: list, create, edit, and delete accounts.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::{ApiError, Gateway};
use crate::net::types::{Envelope, Role, User, UserPayload};
use crate::state::notices::NoticeState;

type UserList = LocalResource<Result<Envelope<Vec<User>>, ApiError>>;
type RoleList = LocalResource<Result<Envelope<Vec<Role>>, ApiError>>;

#[component]
pub fn UsersPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let search = RwSignal::new(String::new());

    let users: UserList = LocalResource::new(move || async move { api::get_users(gw).await });
    let roles: RoleList = LocalResource::new(move || async move { api::get_roles(gw).await });

    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let cedula = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let role_choice = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending_delete = RwSignal::new(None::<User>);

    let open_create = move |_| {
        editing.set(None);
        first_name.set(String::new());
        last_name.set(String::new());
        cedula.set(String::new());
        email.set(String::new());
        username.set(String::new());
        role_choice.set(String::new());
        password.set(String::new());
        show_editor.set(true);
    };

    let open_edit = Callback::new(move |user: User| {
        editing.set(Some(user.id));
        first_name.set(user.first_name);
        last_name.set(user.last_name);
        cedula.set(user.cedula);
        email.set(user.email);
        username.set(user.username);
        role_choice.set(user.role_id.to_string());
        password.set(String::new());
        show_editor.set(true);
    });

    let close_editor = Callback::new(move |()| show_editor.set(false));

    let submit_editor = Callback::new(move |()| {
        let first = first_name.get_untracked().trim().to_owned();
        let last = last_name.get_untracked().trim().to_owned();
        let cedula_value = cedula.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let username_value = username.get_untracked().trim().to_owned();
        if first.is_empty()
            || last.is_empty()
            || cedula_value.is_empty()
            || email_value.is_empty()
            || username_value.is_empty()
        {
            notices.update(|n| n.error("All fields except password are required.".to_owned()));
            return;
        }
        let Ok(role_id) = role_choice.get_untracked().parse::<i64>() else {
            notices.update(|n| n.error("Choose a role.".to_owned()));
            return;
        };
        let password_value = password.get_untracked();
        let id = editing.get_untracked();
        // Blank password on edit keeps the current one.
        if id.is_none() && password_value.is_empty() {
            notices.update(|n| n.error("A password is required for new users.".to_owned()));
            return;
        }
        let payload = UserPayload {
            first_name: first,
            last_name: last,
            cedula: cedula_value,
            email: email_value,
            username: username_value,
            role_id,
            password: if password_value.is_empty() {
                None
            } else {
                Some(password_value)
            },
        };
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_user(gw, id, &payload).await,
                None => api::create_user(gw, &payload).await,
            };
            match result {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    show_editor.set(false);
                    users.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
    });

    let request_delete = Callback::new(move |user: User| {
        pending_delete.set(Some(user));
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(user) = pending_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_user(gw, user.id).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    users.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
            pending_delete.set(None);
        });
    });

    view! {
        <Shell>
            <div class="page users">
                <header class="page__header">
                    <h1>"Users"</h1>
                    <div class="page__tools">
                        <input
                            class="page__search"
                            type="search"
                            placeholder="Search users..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=open_create>
                            "+ New user"
                        </button>
                    </div>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading users..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|result| match result {
                                Ok(env) => {
                                    let needle = search.get().trim().to_lowercase();
                                    let rows = env
                                        .data
                                        .into_iter()
                                        .filter(|u| row_matches(u, &needle))
                                        .collect::<Vec<_>>();
                                    if rows.is_empty() {
                                        view! { <p class="page__empty">"No users match."</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Cedula"</th>
                                                        <th>"Email"</th>
                                                        <th>"Username"</th>
                                                        <th>"Role"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {rows
                                                        .into_iter()
                                                        .map(|user| {
                                                            view! {
                                                                <UserRow
                                                                    user=user
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
                    <UserEditor
                        editing=editing
                        first_name=first_name
                        last_name=last_name
                        cedula=cedula
                        email=email
                        username=username
                        role_choice=role_choice
                        password=password
                        roles=roles
                        on_cancel=close_editor
                        on_submit=submit_editor
                    />
                </Show>

                {move || {
                    pending_delete
                        .get()
                        .map(|user| {
                            view! {
                                <ConfirmDialog
                                    title="Delete user"
                                    message=format!(
                                        "Delete {} {}? Their incidents stay on record.",
                                        user.first_name,
                                        user.last_name,
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

fn row_matches(user: &User, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let name = format!("{} {}", user.first_name, user.last_name).to_lowercase();
    let role = user
        .role
        .as_ref()
        .map(|r| r.name.to_lowercase())
        .unwrap_or_default();
    name.contains(needle)
        || user.cedula.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.username.to_lowercase().contains(needle)
        || role.contains(needle)
}

#[component]
fn UserRow(user: User, on_edit: Callback<User>, on_delete: Callback<User>) -> impl IntoView {
    let name = format!("{} {}", user.first_name, user.last_name);
    let role = user
        .role
        .as_ref()
        .map_or_else(|| format!("role {}", user.role_id), |r| r.name.clone());
    let edit_target = user.clone();
    let delete_target = user.clone();

    view! {
        <tr class="table__row">
            <td>{name}</td>
            <td>{user.cedula.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>{user.username.clone()}</td>
            <td>
                <span class="badge">{role}</span>
            </td>
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

#[component]
fn UserEditor(
    editing: RwSignal<Option<i64>>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    cedula: RwSignal<String>,
    email: RwSignal<String>,
    username: RwSignal<String>,
    role_choice: RwSignal<String>,
    password: RwSignal<String>,
    roles: RoleList,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing.get().is_some() { "Edit user" } else { "New user" }}</h2>
                <div class="dialog__grid">
                    <label class="dialog__label">
                        "First name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Last name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Cedula"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || cedula.get()
                        on:input=move |ev| cedula.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        on:change=move |ev| role_choice.set(event_target_value(&ev))
                    >
                        <option value="" disabled selected=move || role_choice.get().is_empty()>
                            "Choose a role"
                        </option>
                        {move || {
                            let current = role_choice.get();
                            roles
                                .get()
                                .and_then(Result::ok)
                                .map(|env| {
                                    env.data
                                        .into_iter()
                                        .map(|r| {
                                            let value = r.id.to_string();
                                            let selected = value == current;
                                            view! {
                                                <option value=value.clone() selected=selected>
                                                    {r.name}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder=move || {
                            if editing.get().is_some() {
                                "Leave blank to keep the current password"
                            } else {
                                "Password"
                            }
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
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
