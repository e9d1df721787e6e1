//! Result Card Component
//!
//! Shows the most recent footprint against the fixed ideal with the
//! over/under message. Rendered only after a calculation.

use leptos::*;

use footprint::{Assessment, IDEAL_FOOTPRINT};

use crate::state::global::AppState;

/// Footprint result panel
#[component]
pub fn ResultCard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            state.result.get().map(|footprint| {
                let assessment = Assessment::of(footprint, IDEAL_FOOTPRINT);
                let (message, color) = if assessment.is_above() {
                    (
                        format!(
                            "Your footprint is {:.2} tons above the ideal.",
                            assessment.delta()
                        ),
                        "text-red-400",
                    )
                } else {
                    (
                        format!(
                            "Great job! Your footprint is {:.2} tons below the ideal.",
                            assessment.delta()
                        ),
                        "text-green-400",
                    )
                };

                view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-2">"Your Carbon Footprint"</h2>
                        <p class=format!("text-4xl font-bold {}", color)>
                            {format!("{:.2}", footprint)}
                            <span class="text-lg font-normal text-gray-400 ml-2">
                                "tons CO2e/year"
                            </span>
                        </p>
                        <p class="text-gray-400 mt-2">
                            {format!("Ideal footprint: {:.1} tons CO2e/year", IDEAL_FOOTPRINT)}
                        </p>
                        <p class=format!("mt-2 {}", color)>{message}</p>
                    </section>
                }
            })
        }}
    }
}
