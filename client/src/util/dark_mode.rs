//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from storage and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to storage and
//! updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::THEME_KEY;
use crate::util::storage::{BrowserStorage, Storage};

/// Stored preference, if the user ever chose one.
pub fn stored_preference(storage: &impl Storage) -> Option<bool> {
    storage.get(THEME_KEY).map(|val| val == "true")
}

pub fn persist(storage: &impl Storage, enabled: bool) {
    storage.set(THEME_KEY, if enabled { "true" } else { "false" });
}

/// Read the dark mode preference.
///
/// Returns the stored choice, else whether the system prefers dark mode.
pub fn read_preference() -> bool {
    stored_preference(&BrowserStorage).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(&BrowserStorage, next);
    next
}
