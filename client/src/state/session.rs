//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only code that reads or writes the persisted token
//! and user keys. Components never touch storage directly: they read the
//! `RwSignal<SessionState>` provided at the app root, which is refreshed from
//! the store after login, logout, a 401, and on window focus.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::types::User;
use crate::util::storage::{BrowserStorage, Storage};

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// Storage not read yet (SSR and the first hydrated frame).
    pub loading: bool,
}

impl SessionState {
    /// Placeholder before storage is read, identical on server and client
    /// so hydration sees the same markup.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Name shown in the header; falls back to a generic label.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or("Usuário")
            .to_owned()
    }
}

/// Persistence for the session token and cached user profile.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> SessionState {
        SessionState {
            token: self.token(),
            user: self.user(),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        self.storage.load_json(USER_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn save(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        self.save_user(user);
    }

    pub fn save_user(&self, user: &User) {
        self.storage.save_json(USER_KEY, user);
    }

    /// Drop only the token, leaving the cached profile (401 handling).
    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    /// Drop both keys (logout).
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Store over `window.localStorage`.
pub fn browser_session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// Provide the session signal as context. It starts `pending` and is
/// filled from storage once mounted (see `sync_session`).
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::pending());
    provide_context(session);
    session
}

/// The session signal provided by `App`.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Re-read persisted state into the signal, skipping no-op writes.
pub fn sync_session(session: RwSignal<SessionState>) {
    let fresh = browser_session_store().load();
    if session.get_untracked() != fresh {
        session.set(fresh);
    }
}
