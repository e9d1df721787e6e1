//! Notice Component
//!
//! Transient feedback for the two things this app reports: a footprint was
//! logged to the history, or a storage operation failed. The state layer
//! times each notice out; clicking one dismisses it early.

use leptos::*;

use crate::state::global::AppState;

/// Stacked notices in the corner of the page
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|msg| view! {
                    <Notice
                        message=msg
                        icon="🌱"
                        accent="bg-green-600"
                        on_dismiss=move |_| success.set(None)
                    />
                })
            }}
            {move || {
                error.get().map(|msg| view! {
                    <Notice
                        message=msg
                        icon="⚠"
                        accent="bg-red-600"
                        on_dismiss=move |_| error.set(None)
                    />
                })
            }}
        </div>
    }
}

/// One dismissable notice
#[component]
fn Notice(
    #[prop(into)]
    message: String,
    icon: &'static str,
    accent: &'static str,
    on_dismiss: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_dismiss
            title="Dismiss"
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 text-left cursor-pointer",
                accent
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <span class="text-xs opacity-70 pl-2">"✕"</span>
        </button>
    }
}
