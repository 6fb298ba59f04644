//! Header component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::api::sign_out;
use crate::state::{use_session_probe, AppState};

/// Application header with identity-dependent navigation.
///
/// Mounting the header re-verifies the session, so every page that shows
/// it gets a fresh probe.
#[component]
pub fn Header(
    /// Extra content between the logo and the navigation (e.g. a search box)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let status = use_session_probe();

    view! {
        <header class="header flex flex-col sm:flex-row items-center justify-between gap-4 px-4 py-4">
            <a href="/" class="logo flex items-baseline hover:opacity-80 transition-opacity">
                <span class="text-2xl font-bold text-blue-400">"gosearch"</span>
            </a>

            {children.map(|children| children())}

            <nav class="flex items-center gap-4">
                {move || {
                    let current = status.get();
                    if current.is_authenticated {
                        let state = state.clone();
                        let navigate = navigate.clone();
                        view! {
                            <div class="flex items-center gap-4">
                                <span class="text-gray-300">{format!("Hello, {}", current.username)}</span>
                                <a href="/settings" class="nav-link">"Settings"</a>
                                <button
                                    on:click=move |_| {
                                        let navigate = navigate.clone();
                                        sign_out(state.clone(), move || {
                                            navigate("/", Default::default());
                                        });
                                    }
                                    class="nav-link"
                                >
                                    "Logout"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="flex items-center gap-4">
                                <a href="/login" class="nav-link">"Login"</a>
                                <a href="/register" class="nav-link">"Register"</a>
                            </div>
                        }.into_any()
                    }
                }}
            </nav>
        </header>
    }
}
