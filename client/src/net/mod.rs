//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing (base URL, bearer token, error mapping),
//! `resource` the generic CRUD shape, `types` the wire schema; the remaining
//! modules are the typed per-collection entry points pages call.

pub mod api;
pub mod auth;
pub mod exercises;
#[cfg(test)]
pub(crate) mod mock_transport;
pub mod resource;
pub mod types;
pub mod users;
pub mod workout_logs;
pub mod workout_plans;
