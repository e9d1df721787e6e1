//! Global Application State
//!
//! Reactive state management using Leptos signals. The history ledger owns
//! the `localStorage` port; the `history` signal mirrors its records so the
//! chart and result panel re-render after every mutation.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use leptos::*;

use footprint::{
    round2, Calculator, FootprintInput, FootprintRecord, HistoryLedger, ReadyState,
};

use crate::storage::BrowserStore;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Calculator readiness gate; Calculate is a no-op until Ready
    pub ready: RwSignal<ReadyState>,
    /// Most recent footprint, rounded to 2 decimals; `None` until the
    /// first calculation and after a reset
    pub result: RwSignal<Option<f64>>,
    /// Mirror of the ledger records, in insertion order
    pub history: RwSignal<Vec<FootprintRecord>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// The persisted ledger; single UI thread, so RefCell suffices
    ledger: Rc<RefCell<HistoryLedger<BrowserStore>>>,
}

/// Provide global state to the component tree, rehydrating history
/// from `localStorage`
pub fn provide_app_state() {
    let ledger = HistoryLedger::load(BrowserStore::new()).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to load history: {}", e).into());
        HistoryLedger::empty(BrowserStore::new())
    });

    let state = AppState {
        ready: create_rw_signal(ReadyState::new()),
        result: create_rw_signal(None),
        history: create_rw_signal(ledger.records().to_vec()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        ledger: Rc::new(RefCell::new(ledger)),
    };

    provide_context(state);
}

/// Spawn the one-shot calculator initialization.
///
/// Flips the readiness gate to Ready when construction completes. If it
/// never completes, Calculate stays disabled; there is no retry or timeout.
pub fn init_calculator(state: AppState) {
    spawn_local(async move {
        let calculator = Calculator::new();
        state.ready.update(|gate| {
            if let Err(e) = gate.complete(calculator) {
                web_sys::console::error_1(&format!("Calculator init: {}", e).into());
            }
        });
    });
}

impl AppState {
    pub fn is_ready(&self) -> bool {
        self.ready.with(|gate| gate.is_ready())
    }

    /// Run one calculation and append it to the history.
    ///
    /// No-op while the calculator is initializing (the button is disabled
    /// in that state, this is the backstop).
    pub fn calculate(&self, input: FootprintInput) {
        let Some(calculator) = self.ready.with(|gate| gate.calculator().cloned()) else {
            return;
        };

        let footprint = round2(calculator.calculate(&input).footprint);
        self.result.set(Some(footprint));

        let date = Local::now().format("%m/%d/%Y").to_string();
        let record = FootprintRecord::new(date, footprint);

        match self.ledger.borrow_mut().append(record) {
            Ok(()) => {
                self.show_success(&format!("Footprint logged: {:.2} tons CO2e/year", footprint));
            }
            Err(e) => {
                self.show_error(&format!("Failed to save history: {}", e));
            }
        }
        self.sync_history();
    }

    /// Clear the result and wipe the entire history, durable slot included.
    pub fn reset(&self) {
        self.result.set(None);

        if let Err(e) = self.ledger.borrow_mut().clear() {
            self.show_error(&format!("Failed to clear history: {}", e));
        }
        self.sync_history();
    }

    /// Re-mirror the ledger records into the reactive signal.
    fn sync_history(&self) {
        self.history.set(self.ledger.borrow().records().to_vec());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
