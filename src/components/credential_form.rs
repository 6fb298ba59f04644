//! Username/password form shared by the login and register pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use crate::api::{login, probe_session, register};
use crate::credentials::{login_message, register_message, FormMessage};
use crate::state::{use_view_scope, AppState};
use crate::types::Credentials;

/// Which backend endpoint the form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    fn title(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Register",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            FormKind::Login => "Don't have an account? ",
            FormKind::Register => "Already have an account? ",
        }
    }

    fn switch_link(self) -> (&'static str, &'static str) {
        match self {
            FormKind::Login => ("/register", "Register"),
            FormKind::Register => ("/login", "Login"),
        }
    }
}

/// Single-shot credential form
#[component]
pub fn CredentialForm(kind: FormKind) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let scope = use_view_scope();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let message = RwSignal::new(Option::<FormMessage>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        if !credentials.is_complete() || is_loading.get_untracked() {
            return;
        }

        let state = state.clone();
        let navigate = navigate.clone();
        let scope = scope.clone();

        is_loading.set(true);
        message.set(None);

        spawn_local(async move {
            let (outcome, redirect) = match kind {
                FormKind::Register => {
                    let result = register(&state.config, &credentials).await;
                    (register_message(&result), None)
                }
                FormKind::Login => {
                    let result = login(&state.config, &credentials).await;
                    let outcome = login_message(&result);
                    if result.is_ok() {
                        tracing::info!("Logged in as {}", credentials.username);
                        probe_session(state.clone());
                    }
                    let redirect = if outcome.is_success() {
                        state.config.login_redirect.clone()
                    } else {
                        None
                    };
                    (outcome, redirect)
                }
            };

            if !scope.is_alive() {
                return;
            }
            is_loading.set(false);
            message.set(Some(outcome));
            if let Some(route) = redirect {
                navigate(&route, Default::default());
            }
        });
    };

    let (switch_href, switch_label) = kind.switch_link();
    let password_autocomplete = match kind {
        FormKind::Login => "current-password",
        FormKind::Register => "new-password",
    };

    view! {
        <div class="bg-gray-800 p-8 rounded-lg shadow-xl w-full max-w-md">
            <h2 class="text-3xl font-bold mb-6 text-blue-400 text-center">{kind.title()}</h2>

            {move || message.get().map(|m| {
                let class = if m.is_success() {
                    "text-center mb-4 text-green-400"
                } else {
                    "text-center mb-4 text-red-400"
                };
                view! { <p class=class>{m.text().to_string()}</p> }
            })}

            <form on:submit=on_submit>
                <div class="mb-4">
                    <label for="username" class="block text-lg font-medium text-gray-300 mb-2">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        autocomplete="username"
                        class="input w-full"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        required=true
                    />
                </div>
                <div class="mb-6">
                    <label for="password" class="block text-lg font-medium text-gray-300 mb-2">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete=password_autocomplete
                        class="input w-full"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        required=true
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || is_loading.get()
                    class="btn btn-primary w-full py-2"
                >
                    {kind.title()}
                </button>
            </form>

            <div class="mt-6 text-center">
                <p class="text-gray-400">
                    {kind.switch_prompt()}
                    <a href=switch_href class="text-blue-400 hover:underline">{switch_label}</a>
                </p>
            </div>
        </div>
    }
}
