//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private pages apply identical unauthenticated redirect behavior. The check
//! waits for the session to leave `loading` so a stored token is honored
//! before anyone is bounced to `/login`.
//!
//! The decision is made once per page visit. A token dropped later (a 401
//! clears it) only updates the header; the visitor stays on the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Progress of the one-time access check on a private page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessCheck {
    /// Session not read from storage yet.
    Waiting,
    /// Decided: send the visitor to `/login`.
    Redirect,
    /// Decided; later session changes are ignored.
    Settled,
}

/// Advance the access check for the current session snapshot.
pub fn next_access_check(previous: AccessCheck, state: &SessionState) -> AccessCheck {
    match previous {
        AccessCheck::Waiting if state.loading => AccessCheck::Waiting,
        AccessCheck::Waiting if should_redirect_unauth(state) => AccessCheck::Redirect,
        _ => AccessCheck::Settled,
    }
}

/// Redirect to `/login` if the session, once loaded, has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<AccessCheck>| {
        let previous = previous.unwrap_or(AccessCheck::Waiting);
        if previous != AccessCheck::Waiting {
            return AccessCheck::Settled;
        }
        let next = session.with(|state| next_access_check(previous, state));
        if next == AccessCheck::Redirect {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
        next
    });
}
