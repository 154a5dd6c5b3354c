//! App Root Component
//!
//! Provides navigation state and renders the view for the current location.

use leptos::*;
use market_state::navigation::Resolution;
use market_state::routing;

use crate::pages::{
    Analysis, Dashboard, Landing, Login, NotFound, Register, Settings, SymbolDetail, TradeJournal,
};
use crate::state::provide_navigation;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let resolution = provide_navigation().resolution;

    // Exactly one view is mounted; it is replaced whenever the resolution changes
    move || resolution.with(outlet)
}

fn outlet(resolution: &Resolution) -> View {
    let matched = match resolution {
        Resolution::Matched(matched) => matched,
        Resolution::NotFound { path } => return view! { <NotFound path=path.clone() /> }.into_view(),
    };

    match matched.view {
        routing::View::Landing => view! { <Landing /> }.into_view(),
        routing::View::Login => view! { <Login /> }.into_view(),
        routing::View::Register => view! { <Register /> }.into_view(),
        routing::View::Dashboard => view! { <Dashboard /> }.into_view(),
        routing::View::SymbolDetail => match matched.params.symbol() {
            Some(symbol) => view! { <SymbolDetail symbol=symbol.to_string() /> }.into_view(),
            None => view! { <NotFound path=matched.path.clone() /> }.into_view(),
        },
        routing::View::TradeJournal => view! { <TradeJournal /> }.into_view(),
        routing::View::Analysis => view! { <Analysis /> }.into_view(),
        routing::View::Settings => view! { <Settings /> }.into_view(),
    }
}
