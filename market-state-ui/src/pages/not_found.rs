//! Not Found Page
//!
//! Rendered when no route matches the location.

use leptos::*;
use market_state::routing::paths;

use crate::components::Link;
use crate::state::use_navigation;

/// 404 Not Found page
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">
                "Nothing lives at " <code class="font-mono">{path}</code> "."
            </p>
            <div class="flex items-center space-x-4">
                <Link
                    href=paths::LANDING
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Go to home page"
                </Link>
                <button
                    class="px-6 py-3 border border-gray-600 hover:bg-gray-800 rounded-lg font-medium transition-colors"
                    on:click=move |_| nav.back()
                >
                    "Go back"
                </button>
            </div>
        </div>
    }
}
