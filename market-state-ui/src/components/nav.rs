//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use market_state::routing::paths;

use super::Link;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <Link href=paths::LANDING class="flex items-center space-x-3">
                        <span class="text-2xl">"📈"</span>
                        <span class="text-xl font-bold text-white">"Market State"</span>
                    </Link>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href=paths::DASHBOARD label="Dashboard" />
                        <NavLink href=paths::JOURNAL label="Journal" />
                        <NavLink href=paths::ANALYSIS label="Analysis" />
                        <NavLink href=paths::SETTINGS label="Settings" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <Link
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </Link>
    }
}
