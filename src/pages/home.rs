//! Home page with the search entry box

use leptos::prelude::*;
use leptos_meta::Title;
use crate::components::{Header, SearchBox};

#[component]
pub fn HomePage() -> impl IntoView {
    let term = RwSignal::new(String::new());

    view! {
        <Title text="gosearch" />
        <div class="min-h-screen flex flex-col bg-gray-900 text-gray-100">
            <Header />

            <main class="flex flex-col items-center justify-center flex-grow px-4">
                <h1 class="text-7xl font-bold mb-8 text-blue-400 flex items-baseline">
                    "gosearch"
                </h1>
                <SearchBox value=term hero=true />
            </main>
        </div>
    }
}
