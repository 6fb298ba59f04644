//! Search input shared by the home and results pages

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::search::search_href;

/// Search form that navigates to the results page on submit.
///
/// Blank or whitespace-only terms never navigate.
#[component]
pub fn SearchBox(
    /// Current input value
    value: RwSignal<String>,
    /// Large hero variant used on the home page
    #[prop(default = false)]
    hero: bool,
    #[prop(default = "Search with Gemini AI...")]
    placeholder: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match search_href(&value.get_untracked()) {
            Some(href) => navigate(&href, Default::default()),
            None => tracing::debug!("Ignoring blank search"),
        }
    };

    let input_class = if hero {
        "w-full px-6 py-4 text-xl rounded-full border border-gray-700 bg-gray-800 text-gray-100 \
         focus:outline-none focus:ring-2 focus:ring-blue-500 shadow-lg"
    } else {
        "w-full px-4 py-2 rounded-full border border-gray-700 bg-gray-800 text-gray-100 \
         focus:outline-none focus:ring-2 focus:ring-blue-500"
    };

    view! {
        <form on:submit=on_submit class="w-full max-w-xl">
            <div class="relative">
                <input
                    type="text"
                    class=input_class
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <Show when=move || hero>
                    <button
                        type="submit"
                        aria-label="Search"
                        class="absolute right-3 top-1/2 -translate-y-1/2 bg-blue-600 hover:bg-blue-700 text-white p-2 rounded-full"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                        </svg>
                    </button>
                </Show>
            </div>
        </form>
    }
}
