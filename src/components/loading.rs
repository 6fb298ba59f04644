//! Loading indicator

use leptos::prelude::*;

/// Spinner with an optional caption underneath
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-8 h-8")] size: &'static str,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4" role="status">
            <svg
                class=format!("{} animate-spin text-blue-400", size)
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
            >
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"></path>
            </svg>
            {label.map(|text| view! { <p class="text-xl text-blue-400">{text}</p> })}
        </div>
    }
}
