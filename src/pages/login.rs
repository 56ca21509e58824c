//! Login page with email/password sign-in and a register mode.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::use_guest_guard;
use crate::net::api;
use crate::net::http::Gateway;
use crate::net::types::{Credentials, RegisterPayload};
use crate::state::session::SessionState;

/// Authenticates against the backend and stores the returned user and
/// token in the session. Already signed-in visitors are sent to the
/// overview.
#[component]
pub fn LoginPage() -> impl IntoView {
    let gw = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionState>>();
    use_guest_guard();

    let register_mode = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let cedula = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        info.set(None);

        if register_mode.get_untracked() {
            let payload = RegisterPayload {
                first_name: first_name.get_untracked().trim().to_owned(),
                last_name: last_name.get_untracked().trim().to_owned(),
                cedula: cedula.get_untracked().trim().to_owned(),
                username: username.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
            };
            if payload.first_name.is_empty()
                || payload.last_name.is_empty()
                || payload.cedula.is_empty()
                || payload.username.is_empty()
                || payload.email.is_empty()
                || payload.password.is_empty()
            {
                error.set(Some("All fields are required.".to_owned()));
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match api::register_user(gw, &payload).await {
                    Ok(env) => {
                        register_mode.set(false);
                        password.set(String::new());
                        info.set(Some(if env.detail.is_empty() {
                            "Account created. Sign in with your new credentials.".to_owned()
                        } else {
                            env.detail
                        }));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        } else {
            let credentials = Credentials {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                error.set(Some("Email and password are required.".to_owned()));
                return;
            }
            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::login_user(gw, &credentials).await {
                    Ok(env) => match env.token {
                        Some(token) => {
                            session.update(|state| state.session.login(env.data, token));
                            navigate("/", NavigateOptions::default());
                        }
                        // A success body without a token cannot authenticate.
                        None => error.set(Some("Sign-in response carried no token.".to_owned())),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    });

    let toggle_mode = move |_| {
        register_mode.update(|m| *m = !*m);
        error.set(None);
        info.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Incident Desk"</h1>
                <p class="login-card__subtitle">
                    {move || {
                        if register_mode.get() {
                            "Register an account"
                        } else {
                            "Sign in to manage incident reports"
                        }
                    }}
                </p>

                {move || error.get().map(|msg| view! { <p class="login-card__error">{msg}</p> })}
                {move || info.get().map(|msg| view! { <p class="login-card__info">{msg}</p> })}

                <Show when=move || register_mode.get()>
                    <label class="login-card__label">
                        "First name"
                        <input
                            class="login-card__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-card__label">
                        "Last name"
                        <input
                            class="login-card__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-card__label">
                        "Cedula"
                        <input
                            class="login-card__input"
                            type="text"
                            prop:value=move || cedula.get()
                            on:input=move |ev| cedula.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-card__label">
                        "Username"
                        <input
                            class="login-card__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="login-card__label">
                    "Email"
                    <input
                        class="login-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-card__label">
                    "Password"
                    <input
                        class="login-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary login-card__submit"
                    disabled=move || busy.get()
                    on:click=move |_| submit.run(())
                >
                    {move || {
                        if busy.get() {
                            "Working..."
                        } else if register_mode.get() {
                            "Register"
                        } else {
                            "Sign in"
                        }
                    }}
                </button>

                <button class="login-card__toggle" on:click=toggle_mode>
                    {move || {
                        if register_mode.get() {
                            "Have an account? Sign in"
                        } else {
                            "Need an account? Register"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
