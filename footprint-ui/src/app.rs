//! App Root Component
//!
//! Single-page layout: header, activity form, result panel, history chart,
//! and toast notifications. On mount the app rehydrates history from
//! `localStorage` (done while providing state) and spawns the one-shot
//! calculator initialization.

use leptos::*;

use crate::components::{CalculatorForm, HistoryChart, ResultCard, Toast};
use crate::state::global::{init_calculator, provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    // Kick off the one-shot calculator initialization
    let state = use_context::<AppState>().expect("AppState not found");
    init_calculator(state);

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <Header />

            <main class="container mx-auto max-w-4xl px-4 py-8 space-y-8">
                // Activity input form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Your Activity"</h2>
                    <CalculatorForm />
                </section>

                // Result panel, shown after the first calculation
                <ResultCard />

                // History chart, shown once there is history
                <HistoryChart />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Page header
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto max-w-4xl px-4 h-16 flex items-center space-x-3">
                <span class="text-2xl">"🌍"</span>
                <span class="text-xl font-bold text-white">"Carbon Footprint Tracker"</span>
            </div>
        </header>
    }
}
