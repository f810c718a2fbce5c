//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one signal per module here and provides it; pages and
//! components fetch them with `expect_context` / the `use_*` helpers.

pub mod session;
pub mod toast;
pub mod ui;
