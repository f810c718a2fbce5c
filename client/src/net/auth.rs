//! Login, registration, and logout.
//!
//! Successful login/register mirrors the returned token and user into the
//! session store; the caller then refreshes the session signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, ApiError, Transport};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User, WeightUnit};
use crate::state::session::SessionStore;
use crate::util::storage::Storage;

fn remember<T: Transport, S: Storage>(api: &ApiClient<T, S>, response: &AuthResponse) {
    if !response.token.is_empty() {
        api.session().save(&response.token, &response.user);
    }
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request; nothing is persisted then.
pub async fn login<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    request: &LoginRequest,
) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = api.post("/auth/login", request).await?;
    remember(api, &response);
    Ok(response)
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the `ApiError` of the failed request; nothing is persisted then.
pub async fn register<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = api.post("/auth/register", request).await?;
    remember(api, &response);
    Ok(response)
}

/// Forget the session locally. The backend keeps no logout endpoint.
pub fn logout<S: Storage>(session: &SessionStore<S>) {
    session.clear();
}

pub fn is_authenticated<S: Storage>(session: &SessionStore<S>) -> bool {
    session.is_authenticated()
}

pub fn current_user<S: Storage>(session: &SessionStore<S>) -> Option<User> {
    session.user()
}

/// Trim and require both login fields.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Informe email e senha.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Trim and require every registration field; passwords must match.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    weight_unit: WeightUnit,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Preencha todos os campos.");
    }
    if password != confirm {
        return Err("As senhas não coincidem.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        weight_unit,
    })
}
