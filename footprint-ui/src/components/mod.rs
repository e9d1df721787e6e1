//! UI Components
//!
//! Reusable Leptos components for the tracker.

pub mod chart;
pub mod form;
pub mod result_card;
pub mod toast;

pub use chart::HistoryChart;
pub use form::CalculatorForm;
pub use result_card::ResultCard;
pub use toast::Toast;
