//! Dashboard Page
//!
//! Overview page with a symbol search that opens the detail view.

use leptos::*;
use market_state::routing::paths;

use crate::components::{PageLayout, Placeholder};
use crate::state::use_navigation;

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <PageLayout title="Dashboard" subtitle="Market state across your watchlist">
            <SymbolSearch />
            <Placeholder message="Watchlist overview is not yet implemented." />
        </PageLayout>
    }
}

/// Normalised ticker for a search query, if any
pub fn ticker_from_query(query: &str) -> Option<String> {
    let ticker = query.trim().to_uppercase();
    (!ticker.is_empty()).then_some(ticker)
}

/// Ticker search form
#[component]
fn SymbolSearch() -> impl IntoView {
    let nav = use_navigation();
    let (query, set_query) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(ticker) = ticker_from_query(&query.get()) {
            nav.navigate(&paths::symbol(&ticker));
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Look up a symbol"</h2>
            <form class="flex space-x-3" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="AAPL"
                    class="flex-1 bg-gray-700 border border-gray-600 rounded-lg px-4 py-2 focus:outline-none focus:border-primary-500"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Open"
                </button>
            </form>
        </section>
    }
}
