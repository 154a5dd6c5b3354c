//! Login Page

use leptos::*;
use market_state::routing::paths;

use crate::components::{AuthLayout, Link, Placeholder};

/// Sign-in page component
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <AuthLayout title="Sign in" subtitle="Welcome back to Market State">
            <Placeholder message="Sign-in is not yet implemented." />
            <p class="text-sm text-gray-400 text-center">
                "No account yet? "
                <Link href=paths::REGISTER class="text-primary-400 hover:underline">
                    "Create one"
                </Link>
            </p>
        </AuthLayout>
    }
}
