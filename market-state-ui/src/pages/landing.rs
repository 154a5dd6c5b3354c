//! Landing Page
//!
//! Marketing page with entry points to sign in and sign up.

use leptos::*;
use market_state::routing::paths;

use crate::components::Link;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <Hero />
            <Features />
            <HowItWorks />
            <CallToAction />
            <footer class="border-t border-gray-800 py-6 text-center text-sm text-gray-500">
                "Market State Analysis. Research tool, not investment advice."
            </footer>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-24 text-center">
            <div class="text-5xl mb-6">"📈"</div>
            <h1 class="text-5xl font-bold mb-4">"Read the state of the market"</h1>
            <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-8">
                "Classify each symbol's trend, volatility and momentum regime, \
                 keep a journal of your trades and see how your decisions line up."
            </p>
            <div class="flex items-center justify-center space-x-4">
                <Link
                    href=paths::REGISTER
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Get started"
                </Link>
                <Link
                    href=paths::LOGIN
                    class="px-6 py-3 border border-gray-600 hover:bg-gray-800 rounded-lg font-medium transition-colors"
                >
                    "Sign in"
                </Link>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-16 grid gap-6 md:grid-cols-2 lg:grid-cols-4">
            <FeatureCard
                icon="🧭"
                title="Market state"
                text="Trend, range or breakout: one label per symbol, updated each session."
            />
            <FeatureCard
                icon="🔎"
                title="Symbol detail"
                text="Drill into any ticker to see the signals behind its current state."
            />
            <FeatureCard
                icon="📓"
                title="Trade journal"
                text="Record entries and exits with the state the market was in at the time."
            />
            <FeatureCard
                icon="📊"
                title="Analysis"
                text="Compare results across market states to find where your edge is."
            />
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-400">{text}</p>
        </div>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-16">
            <h2 class="text-3xl font-bold text-center mb-10">"How it works"</h2>
            <div class="grid gap-6 md:grid-cols-3">
                <StepCard number=1 title="Pick your symbols" text="Search a ticker from the dashboard." />
                <StepCard number=2 title="Check the state" text="See which regime each symbol is in right now." />
                <StepCard number=3 title="Journal and review" text="Log trades and review them by market state." />
            </div>
        </section>
    }
}

#[component]
fn StepCard(
    number: u8,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="w-10 h-10 rounded-full bg-primary-600 flex items-center justify-center font-bold mb-4">
                {number}
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-400">{text}</p>
        </div>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-16 text-center">
            <h2 class="text-3xl font-bold mb-4">"Ready to start?"</h2>
            <p class="text-gray-400 mb-6">"Create an account in under a minute."</p>
            <Link
                href=paths::REGISTER
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Create account"
            </Link>
        </section>
    }
}
