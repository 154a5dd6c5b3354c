//! Trade Journal Page

use leptos::*;

use crate::components::{PageLayout, Placeholder};

#[component]
pub fn TradeJournal() -> impl IntoView {
    view! {
        <PageLayout title="Trade Journal" subtitle="Your trades and the market state behind them">
            <Placeholder message="The trade journal is not yet implemented." />
        </PageLayout>
    }
}
