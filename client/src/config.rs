//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time so the WASM bundle and the
//! SSR build agree on it without a runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default REST backend used when `GYMTRACK_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized user profile.
pub const USER_KEY: &str = "user";

/// Storage key for the dark-mode preference.
pub const THEME_KEY: &str = "gymtrack_dark";

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Base URL for every REST call, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("GYMTRACK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
