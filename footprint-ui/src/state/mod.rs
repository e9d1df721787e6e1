//! State Management
//!
//! Global application state built on Leptos signals.

pub mod global;

pub use global::{init_calculator, provide_app_state, AppState};
