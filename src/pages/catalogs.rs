//! Catalog maintenance for the two lookup tables: roles and statuses.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::http::Gateway;
use crate::net::types::{Role, RolePayload, Status, StatusPayload};
use crate::state::notices::NoticeState;

#[component]
pub fn CatalogsPage() -> impl IntoView {
    view! {
        <Shell>
            <div class="page catalogs">
                <header class="page__header">
                    <h1>"Catalogs"</h1>
                </header>
                <div class="catalogs__grid">
                    <RolesSection/>
                    <StatusesSection/>
                </div>
            </div>
        </Shell>
    }
}

#[component]
fn RolesSection() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let roles = LocalResource::new(move || async move { api::get_roles(gw).await });

    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Role>);

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let submit = Callback::new(move |()| {
        let name_value = name.get_untracked().trim().to_owned();
        if name_value.is_empty() {
            notices.update(|n| n.error("Role name is required.".to_owned()));
            return;
        }
        let description_value = description.get_untracked().trim().to_owned();
        let payload = RolePayload {
            name: name_value,
            description: if description_value.is_empty() {
                None
            } else {
                Some(description_value)
            },
        };
        let id = editing.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_role(gw, id, &payload).await,
                None => api::create_role(gw, &payload).await,
            };
            match result {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    reset_form();
                    roles.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
    });

    let start_edit = Callback::new(move |role: Role| {
        editing.set(Some(role.id));
        name.set(role.name);
        description.set(role.description.unwrap_or_default());
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(role) = pending_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_role(gw, role.id).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    roles.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
            pending_delete.set(None);
        });
    });

    view! {
        <section class="catalog">
            <h2>"Roles"</h2>
            <div class="catalog__form">
                <input
                    class="catalog__input"
                    type="text"
                    placeholder="Role name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="catalog__input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    {move || if editing.get().is_some() { "Save role" } else { "Add role" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" on:click=move |_| reset_form()>
                        "Cancel"
                    </button>
                </Show>
            </div>
            <Suspense fallback=move || view! { <p class="page__loading">"Loading roles..."</p> }>
                {move || {
                    roles
                        .get()
                        .map(|result| match result {
                            Ok(env) if env.data.is_empty() => {
                                view! { <p class="page__empty">"No roles defined."</p> }.into_any()
                            }
                            Ok(env) => {
                                view! {
                                    <ul class="catalog__list">
                                        {env
                                            .data
                                            .into_iter()
                                            .map(|role| {
                                                let edit_target = role.clone();
                                                let delete_target = role.clone();
                                                let detail = role.description.clone().unwrap_or_default();
                                                view! {
                                                    <li class="catalog__item">
                                                        <div class="catalog__text">
                                                            <span class="catalog__name">{role.name.clone()}</span>
                                                            <span class="catalog__detail">{detail}</span>
                                                        </div>
                                                        <div class="catalog__actions">
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| start_edit.run(edit_target.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| pending_delete.set(
                                                                    Some(delete_target.clone()),
                                                                )
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
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
                                view! { <p class="page__error">{e.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                pending_delete
                    .get()
                    .map(|role| {
                        view! {
                            <ConfirmDialog
                                title="Delete role"
                                message=format!("Delete the {} role?", role.name)
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn StatusesSection() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let statuses = LocalResource::new(move || async move { api::get_statuses(gw).await });

    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Status>);

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let submit = Callback::new(move |()| {
        let name_value = name.get_untracked().trim().to_owned();
        if name_value.is_empty() {
            notices.update(|n| n.error("Status name is required.".to_owned()));
            return;
        }
        let description_value = description.get_untracked().trim().to_owned();
        let payload = StatusPayload {
            name: name_value,
            description: if description_value.is_empty() {
                None
            } else {
                Some(description_value)
            },
        };
        let id = editing.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_status(gw, id, &payload).await,
                None => api::create_status(gw, &payload).await,
            };
            match result {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    reset_form();
                    statuses.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
        });
    });

    let start_edit = Callback::new(move |status: Status| {
        editing.set(Some(status.id));
        name.set(status.name);
        description.set(status.description.unwrap_or_default());
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(status) = pending_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_status(gw, status.id).await {
                Ok(env) => {
                    notices.update(|n| n.success(env.detail));
                    statuses.refetch();
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => notices.update(|n| n.error(e.to_string())),
            }
            pending_delete.set(None);
        });
    });

    view! {
        <section class="catalog">
            <h2>"Statuses"</h2>
            <div class="catalog__form">
                <input
                    class="catalog__input"
                    type="text"
                    placeholder="Status name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="catalog__input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    {move || if editing.get().is_some() { "Save status" } else { "Add status" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" on:click=move |_| reset_form()>
                        "Cancel"
                    </button>
                </Show>
            </div>
            <Suspense fallback=move || view! { <p class="page__loading">"Loading statuses..."</p> }>
                {move || {
                    statuses
                        .get()
                        .map(|result| match result {
                            Ok(env) if env.data.is_empty() => {
                                view! { <p class="page__empty">"No statuses defined."</p> }
                                    .into_any()
                            }
                            Ok(env) => {
                                view! {
                                    <ul class="catalog__list">
                                        {env
                                            .data
                                            .into_iter()
                                            .map(|status| {
                                                let edit_target = status.clone();
                                                let delete_target = status.clone();
                                                let detail = status.description.clone().unwrap_or_default();
                                                view! {
                                                    <li class="catalog__item">
                                                        <div class="catalog__text">
                                                            <span class="catalog__name">{status.name.clone()}</span>
                                                            <span class="catalog__detail">{detail}</span>
                                                        </div>
                                                        <div class="catalog__actions">
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| start_edit.run(edit_target.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| pending_delete.set(
                                                                    Some(delete_target.clone()),
                                                                )
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
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
                                view! { <p class="page__error">{e.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                pending_delete
                    .get()
                    .map(|status| {
                        view! {
                            <ConfirmDialog
                                title="Delete status"
                                message=format!("Delete the {} status?", status.name)
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </section>
    }
}
