//! Account settings endpoints (`/users/*`).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{ApiClient, ApiError, Transport};
use super::types::{PasswordChange, Preferences, ProfileUpdate, User};
use crate::util::storage::Storage;

/// `GET /users/profile`.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn fetch_profile<T: Transport, S: Storage>(api: &ApiClient<T, S>) -> Result<User, ApiError> {
    api.get("/users/profile").await
}

/// Profile for the settings page: the cached session user when present,
/// otherwise the backend's copy.
///
/// # Errors
///
/// Returns the `ApiError` of the fallback request.
pub async fn load_profile<T: Transport, S: Storage>(api: &ApiClient<T, S>) -> Result<User, ApiError> {
    if let Some(user) = api.session().user() {
        return Ok(user);
    }
    fetch_profile(api).await
}

/// `PUT /users/profile`, then mirror the change into the cached user.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request; the cache is untouched then.
pub async fn update_profile<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    update: &ProfileUpdate,
) -> Result<(), ApiError> {
    api.put_discarding("/users/profile", update).await?;
    if let Some(mut user) = api.session().user() {
        user.name.clone_from(&update.name);
        user.email.clone_from(&update.email);
        user.weight_unit = update.weight_unit;
        api.session().save_user(&user);
    }
    Ok(())
}

/// `PUT /users/password`.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn change_password<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    change: &PasswordChange,
) -> Result<(), ApiError> {
    api.put_discarding("/users/password", change).await
}

/// `PUT /users/preferences`.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn update_preferences<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    preferences: &Preferences,
) -> Result<(), ApiError> {
    api.put_discarding("/users/preferences", preferences).await
}

/// Build a password change; the new password must be typed twice.
///
/// # Errors
///
/// Returns the message to show when fields are blank or do not match.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if current.is_empty() || new.is_empty() {
        return Err("Preencha a senha atual e a nova senha.");
    }
    if new != confirm {
        return Err("A nova senha e a confirmação da senha devem ser iguais.");
    }
    Ok(PasswordChange {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
    })
}
