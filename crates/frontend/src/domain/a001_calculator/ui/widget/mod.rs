//! Calculator Widget UI Module
//!
//! Same MVVM split as the other forms, plus a pure core:
//! - state.rs / pricing.rs: state machine and recompute, no DOM
//! - export.rs: CSV and send payload builders
//! - model.rs: API functions (fetch, send)
//! - view_model.rs: signals, timers and commands
//! - view.rs, row.rs, controls.rs: Leptos components (pure UI)

mod controls;
pub mod export;
mod model;
pub mod pricing;
mod row;
pub mod state;
mod view;
mod view_model;

pub use view::CalculatorWidget;
pub use view_model::CalculatorViewModel;
