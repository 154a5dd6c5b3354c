//! Symbol Detail Page
//!
//! Detail view for one ticker. The ticker arrives as a prop taken from the
//! matched route's `symbol` parameter.

use leptos::*;

use crate::components::{PageLayout, Placeholder};

/// Symbol detail page component
#[component]
pub fn SymbolDetail(symbol: String) -> impl IntoView {
    let subtitle = format!("Market state for {}", symbol);

    view! {
        <PageLayout title="Symbol Detail" subtitle=subtitle>
            <section class="bg-gray-800 rounded-xl p-6 flex items-center justify-between">
                <div>
                    <div class="text-sm text-gray-400">"Symbol"</div>
                    <div class="text-4xl font-bold font-mono">{symbol}</div>
                </div>
                <span class="px-3 py-1 rounded-full bg-gray-700 text-gray-300 text-sm">"State unavailable"</span>
            </section>
            <Placeholder message="Symbol analysis is not yet implemented." />
        </PageLayout>
    }
}
