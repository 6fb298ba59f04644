//! gosearch web front-end
//!
//! A Leptos client for the gosearch search and summarization backend:
//! a search box, a results page, login/register forms and per-user
//! settings. All state is held in view memory and re-fetched from the
//! backend on every mount.

pub mod api;
pub mod components;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pages;
pub mod scope;
pub mod search;
pub mod session;
pub mod settings;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{
    home::HomePage, login::LoginPage, register::RegisterPage, results::ResultsPage,
    settings::SettingsPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/search") view=ResultsPage />
                <Route path=path!("/settings") view=SettingsPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-gray-100">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-500 mb-4">"404"</h1>
                <p class="text-xl text-gray-400 mb-8">"Page not found"</p>
                <a href="/" class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors">
                    "Back to search"
                </a>
            </div>
        </div>
    }
}
