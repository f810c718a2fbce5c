//! Toast notifications raised by page actions.
//!
//! DESIGN
//! ======
//! Pages push toasts through `notify_success` / `notify_failure`; the
//! `Toaster` component renders the queue and expires entries on a timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::session::{SessionState, sync_session};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

/// Most toasts kept on screen at once.
pub const MAX_VISIBLE: usize = 3;

impl ToastState {
    /// Queue a toast and return its id. The oldest entry is dropped once
    /// `MAX_VISIBLE` is exceeded.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

pub fn notify_success(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    toasts.update(|t| {
        t.push(title, description, ToastVariant::Default);
    });
}

pub fn notify_error(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    toasts.update(|t| {
        t.push(title, description, ToastVariant::Destructive);
    });
}

/// Report a failed API call: destructive toast with the server message or
/// `fallback`, and a session refresh when the backend rejected the token.
pub fn notify_failure(
    toasts: RwSignal<ToastState>,
    session: RwSignal<SessionState>,
    title: &str,
    fallback: &str,
    error: &ApiError,
) {
    leptos::logging::warn!("{title}: {error}");
    notify_error(toasts, title, &error.user_message(fallback));
    if error.is_unauthorized() {
        sync_session(session);
    }
}
