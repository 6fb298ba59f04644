//! Single search result

use leptos::prelude::*;
use crate::types::SearchResult;

#[component]
pub fn ResultCard(result: SearchResult) -> impl IntoView {
    let SearchResult { title, link, snippet } = result;

    view! {
        <article class="mb-6">
            <h3 class="text-xl font-semibold text-blue-400 hover:underline">
                <a href=link.clone() target="_blank" rel="noopener noreferrer">{title}</a>
            </h3>
            <p class="text-green-300 text-sm mb-1 break-all">{link}</p>
            <p class="text-gray-300">{snippet}</p>
        </article>
    }
}
