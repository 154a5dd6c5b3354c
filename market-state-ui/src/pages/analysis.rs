//! Analysis Page

use leptos::*;

use crate::components::{PageLayout, Placeholder};

#[component]
pub fn Analysis() -> impl IntoView {
    view! {
        <PageLayout title="Analysis" subtitle="Performance broken down by market state">
            <Placeholder message="Analysis is not yet implemented." />
        </PageLayout>
    }
}
