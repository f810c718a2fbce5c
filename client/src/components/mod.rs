//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and the shared forms while reading and
//! writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod exercise_form;
pub mod header;
pub mod toaster;
pub mod workout_plan_form;
