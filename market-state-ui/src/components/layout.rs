//! Page Layouts
//!
//! Frames shared by the application pages and the sign-in pages.

use leptos::*;
use market_state::routing::paths;

use super::{Link, Nav};

/// Application page: navigation bar, heading and content
#[component]
pub fn PageLayout(
    title: &'static str,
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />
            <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">{title}</h1>
                    {subtitle.map(|s| view! { <p class="text-gray-400 mt-1">{s}</p> })}
                </div>
                {children()}
            </main>
        </div>
    }
}

/// Centered card used by Login and Register
#[component]
pub fn AuthLayout(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center px-4">
            <Link href=paths::LANDING class="mb-8 flex items-center space-x-3">
                <span class="text-3xl">"📈"</span>
                <span class="text-2xl font-bold">"Market State"</span>
            </Link>
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold">{title}</h1>
                    <p class="text-gray-400 mt-1">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Stand-in for a section that has no content yet
#[component]
pub fn Placeholder(message: &'static str) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 text-center text-gray-400">
            <div class="text-4xl mb-2">"🚧"</div>
            <p>{message}</p>
        </section>
    }
}
