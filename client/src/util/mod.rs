//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and form logic from
//! page and component code so they can be tested natively.

pub mod auth;
pub mod catalog;
pub mod dark_mode;
pub mod exercise_filter;
pub mod log_draft;
pub mod nav;
pub mod plan_form;
pub mod progress;
pub mod request_guard;
pub mod set_list;
pub mod storage;
