//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, guarded requests,
//! toasts, navigation) and delegates rendering details to `components`.

pub mod exercise_edit;
pub mod exercise_new;
pub mod exercises;
pub mod home;
pub mod log_workout;
pub mod login;
pub mod profile;
pub mod progress;
pub mod register;
pub mod workout_plan_edit;
pub mod workout_plan_new;
pub mod workout_plans;
