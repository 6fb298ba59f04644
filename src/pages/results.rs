//! Search results page
//!
//! The page state lives in a [`SearchMachine`]. The initial search is
//! issued synchronously from the URL at mount; later changes to `q` issue
//! a new one, superseding whatever is still in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use crate::api::search;
use crate::components::{Header, LoadingSpinner, ResultCard, SearchBox};
use crate::scope::ViewScope;
use crate::search::{SearchMachine, SearchState};
use crate::state::{use_view_scope, AppState};

/// Issue a search for `query` and apply its outcome when it arrives
fn start_search(
    state: &AppState,
    machine: RwSignal<SearchMachine>,
    scope: &ViewScope,
    query: Option<String>,
) {
    let Some(ticket) = machine.try_update(|m| m.issue(query.as_deref())).flatten() else {
        return;
    };

    let config = state.config.clone();
    let scope = scope.clone();
    spawn_local(async move {
        tracing::debug!("Searching for {:?}", ticket.query());
        let outcome = search(&config, ticket.query()).await;
        if !scope.is_alive() {
            tracing::debug!("Results page gone, dropping response for {:?}", ticket.query());
            return;
        }
        machine.try_update(|m| m.resolve(&ticket, outcome));
    });
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let scope = use_view_scope();
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.with(|params| params.get("q")));

    let machine = RwSignal::new(SearchMachine::new());
    let search_term = RwSignal::new(query.get_untracked().unwrap_or_default());

    on_cleanup(move || {
        machine.try_update(|m| m.detach());
    });

    start_search(&state, machine, &scope, query.get_untracked());

    Effect::watch(
        move || query.get(),
        move |q, _, _| {
            search_term.set(q.clone().unwrap_or_default());
            start_search(&state, machine, &scope, q.clone());
        },
        false,
    );

    let current = move || machine.with(|m| m.state().clone());

    view! {
        <Title text="Search results - gosearch" />
        <div class="min-h-screen bg-gray-900 text-gray-100 p-4 sm:p-8">
            <Header>
                <div class="flex-grow mx-0 sm:mx-4 max-w-xl w-full sm:w-auto">
                    <SearchBox value=search_term />
                </div>
            </Header>

            <main class="max-w-3xl mx-auto mt-6">
                {move || {
                    let view_state = current();
                    let line = view_state.status_line();
                    match view_state {
                        SearchState::NoQuery => view! {
                            <p class="text-xl text-gray-400 text-center">{line}</p>
                        }.into_any(),
                        SearchState::Loading { .. } => view! {
                            <div class="flex justify-center py-16">
                                <LoadingSpinner label=line />
                            </div>
                        }.into_any(),
                        SearchState::Failed { .. } => view! {
                            <p class="text-xl text-red-400 text-center">{line}</p>
                        }.into_any(),
                        SearchState::Empty { .. } => view! {
                            <p class="text-xl text-gray-400 text-center">{line}</p>
                        }.into_any(),
                        SearchState::Succeeded { results, .. } => view! {
                            <div>
                                <p class="text-sm text-gray-500 mb-4">{line}</p>
                                {results
                                    .into_iter()
                                    .map(|result| view! { <ResultCard result=result /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
