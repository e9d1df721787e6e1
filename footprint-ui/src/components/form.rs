//! Calculator Form Component
//!
//! Four raw-text numeric fields plus Calculate and Reset. Fields hold the
//! text exactly as typed; numeric coercion happens at submit time, where
//! empty or non-numeric fields count as zero.

use leptos::*;

use footprint::FootprintInput;

use crate::state::global::AppState;

/// Activity input form component
#[component]
pub fn CalculatorForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (electricity, set_electricity) = create_signal(String::new());
    let (gas, set_gas) = create_signal(String::new());
    let (car_miles, set_car_miles) = create_signal(String::new());
    let (flights, set_flights) = create_signal(String::new());

    let state_for_ready = state.clone();
    let not_ready = create_memo(move |_| !state_for_ready.is_ready());

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = FootprintInput::from_raw(
            &electricity.get(),
            &gas.get(),
            &car_miles.get(),
            &flights.get(),
        );
        state_for_submit.calculate(input);
    };

    let state_for_reset = state;
    let on_reset = move |_| {
        set_electricity.set(String::new());
        set_gas.set(String::new());
        set_car_miles.set(String::new());
        set_flights.set(String::new());
        state_for_reset.reset();
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <NumberField
                placeholder="Monthly Electricity Usage (kWh)"
                value=electricity
                set_value=set_electricity
            />
            <NumberField
                placeholder="Monthly Natural Gas Usage (therms)"
                value=gas
                set_value=set_gas
            />
            <NumberField
                placeholder="Monthly Car Miles Driven"
                value=car_miles
                set_value=set_car_miles
            />
            <NumberField
                placeholder="Number of Flights per Year"
                value=flights
                set_value=set_flights
            />

            <div class="grid grid-cols-2 gap-4">
                <button
                    type="submit"
                    disabled=move || not_ready.get()
                    class="w-full py-3 rounded-lg font-semibold bg-primary-600 hover:bg-primary-700
                           disabled:bg-gray-600 disabled:cursor-not-allowed transition-colors"
                >
                    {move || if not_ready.get() { "Initializing..." } else { "Calculate" }}
                </button>
                <button
                    type="button"
                    on:click=on_reset
                    class="w-full py-3 rounded-lg font-semibold bg-gray-700 hover:bg-gray-600
                           transition-colors"
                >
                    "Reset & Clear History"
                </button>
            </div>
        </form>
    }
}

/// One raw-text numeric field
#[component]
fn NumberField(
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}
