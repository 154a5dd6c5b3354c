//! Settings Page
//!
//! Account and display preferences.

use leptos::*;

use crate::components::{PageLayout, Placeholder};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <PageLayout title="Settings" subtitle="Configure your Market State account">
            <Placeholder message="Settings are not yet implemented." />
            <AboutSection />
        </PageLayout>
    }
}

/// Version information
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <p class="text-gray-400">
                "Market State Analysis v" {env!("CARGO_PKG_VERSION")}
            </p>
        </section>
    }
}
