//! Register Page

use leptos::*;
use market_state::routing::paths;

use crate::components::{AuthLayout, Link, Placeholder};

/// Sign-up page component
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <AuthLayout title="Create account" subtitle="Start tracking market state">
            <Placeholder message="Registration is not yet implemented." />
            <p class="text-sm text-gray-400 text-center">
                "Already registered? "
                <Link href=paths::LOGIN class="text-primary-400 hover:underline">
                    "Sign in"
                </Link>
            </p>
        </AuthLayout>
    }
}
