//! Settings page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use crate::api::{fetch_settings, save_settings};
use crate::components::{Header, LoadingSpinner, SettingsToggle};
use crate::settings::{FollowUp, MessageKind, SettingsMachine, SettingsPhase};
use crate::state::{use_view_scope, AppState};
use crate::types::SettingsField;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let scope = use_view_scope();
    let machine = RwSignal::new(SettingsMachine::new());

    on_cleanup(move || {
        machine.try_update(|m| m.detach());
    });

    // Load the authoritative copy on mount
    if let Some(ticket) = machine.try_update(|m| m.begin_fetch()) {
        let config = state.config.clone();
        let navigate = navigate.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let result = fetch_settings(&config).await;
            if !scope.is_alive() {
                return;
            }
            let follow_up = machine
                .try_update(|m| m.fetch_resolved(ticket, result))
                .unwrap_or(FollowUp::Stay);
            if let Some(route) = follow_up.route() {
                tracing::info!("Not signed in, redirecting to {}", route);
                navigate(route, Default::default());
            }
        });
    }

    let navigate_for_save = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, record)) = machine.try_update(|m| m.begin_save()).flatten() else {
            return;
        };

        let config = state.config.clone();
        let navigate = navigate_for_save.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let result = save_settings(&config, &record).await;
            if !scope.is_alive() {
                return;
            }
            let follow_up = machine
                .try_update(|m| m.save_resolved(ticket, result))
                .unwrap_or(FollowUp::Stay);
            if let Some(route) = follow_up.route() {
                tracing::info!("Session expired while saving, redirecting to {}", route);
                navigate(route, Default::default());
            }
        });
    };

    let message = move || {
        machine.with(|m| m.message().map(|(kind, text)| (kind, text.to_string())))
    };
    let is_loading = move || machine.with(|m| m.phase() == &SettingsPhase::Loading);
    let is_saving = move || machine.with(|m| m.is_saving());

    view! {
        <Title text="Settings - gosearch" />
        <div class="min-h-screen flex flex-col bg-gray-900 text-gray-100">
            <Header />

            <main class="flex flex-col items-center justify-center flex-grow p-4">
                <div class="bg-gray-800 p-8 rounded-lg shadow-xl w-full max-w-md">
                    <h2 class="text-3xl font-bold mb-6 text-blue-400 text-center">"Settings"</h2>

                    <Show when=is_loading>
                        <div class="flex justify-center mb-4">
                            <LoadingSpinner size="w-6 h-6" />
                        </div>
                    </Show>

                    {move || message().map(|(kind, text)| {
                        let class = match kind {
                            MessageKind::Success => "text-center mb-4 text-green-400",
                            MessageKind::Error => "text-center mb-4 text-red-400",
                        };
                        view! { <p class=class>{text}</p> }
                    })}

                    <form on:submit=on_submit>
                        <SettingsToggle
                            machine=machine
                            field=SettingsField::DarkMode
                            id="dark_mode"
                            label="Dark Mode"
                        />
                        <SettingsToggle
                            machine=machine
                            field=SettingsField::SafeSearch
                            id="safe_search"
                            label="Safe Search"
                        />
                        <button
                            type="submit"
                            disabled=is_saving
                            class="btn btn-primary w-full py-2 mt-2"
                        >
                            "Save Settings"
                        </button>
                    </form>

                    <div class="mt-6 text-center">
                        <button
                            on:click=move |_| navigate("/", Default::default())
                            class="text-gray-400 hover:text-gray-100 text-sm"
                        >
                            "Back to Home"
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
