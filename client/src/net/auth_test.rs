use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::mock_transport::{MockTransport, TEST_BASE_URL, test_client};
use crate::net::types::WeightUnit;

fn auth_body() -> serde_json::Value {
    serde_json::json!({
        "token": "tok-9",
        "user": { "id": 9, "name": "Bia", "email": "bia@example.com", "weightUnit": "kg" }
    })
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "bia@example.com".to_owned(), password: "segredo".to_owned() }
}

#[test]
fn login_persists_token_and_user() {
    let api = test_client(MockTransport::new().respond(200, auth_body()));

    let response = block_on(login(&api, &login_request())).unwrap();

    assert_eq!(response.token, "tok-9");
    assert!(is_authenticated(api.session()));
    assert_eq!(current_user(api.session()).map(|u| u.name), Some("Bia".to_owned()));

    let request = api.transport().last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{TEST_BASE_URL}/auth/login"));
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "email": "bia@example.com", "password": "segredo" }))
    );
}

#[test]
fn failed_login_persists_nothing() {
    let api = test_client(MockTransport::new().respond(401, serde_json::json!({ "message": "Credenciais inválidas" })));
    let err = block_on(login(&api, &login_request())).unwrap_err();
    assert_eq!(err.user_message("x"), "Credenciais inválidas");
    assert!(!is_authenticated(api.session()));
    assert_eq!(current_user(api.session()), None);
}

#[test]
fn login_with_empty_token_is_not_persisted() {
    let mut body = auth_body();
    body["token"] = serde_json::json!("");
    let api = test_client(MockTransport::new().respond(200, body));
    block_on(login(&api, &login_request())).unwrap();
    assert!(!is_authenticated(api.session()));
}

#[test]
fn register_persists_session() {
    let api = test_client(MockTransport::new().respond(201, auth_body()));
    let request = validate_register("Bia", "bia@example.com", "segredo", "segredo", WeightUnit::Lbs).unwrap();

    block_on(register(&api, &request)).unwrap();

    assert!(is_authenticated(api.session()));
    let sent = api.transport().last_request();
    assert_eq!(sent.url, format!("{TEST_BASE_URL}/auth/register"));
    assert_eq!(sent.body.unwrap()["weightUnit"], "lbs");
}

#[test]
fn logout_clears_token_and_user() {
    let api = test_client(MockTransport::new().respond(200, auth_body()));
    block_on(login(&api, &login_request())).unwrap();

    logout(api.session());

    assert!(!is_authenticated(api.session()));
    assert_eq!(current_user(api.session()), None);
}

#[test]
fn validate_login_trims_email_and_requires_fields() {
    assert_eq!(validate_login("  bia@example.com ", "pw").unwrap().email, "bia@example.com");
    assert_eq!(validate_login("   ", "pw"), Err("Informe email e senha."));
    assert_eq!(validate_login("bia@example.com", ""), Err("Informe email e senha."));
}

#[test]
fn validate_register_requires_matching_passwords() {
    assert_eq!(
        validate_register("Bia", "b@x.com", "a", "b", WeightUnit::Kg),
        Err("As senhas não coincidem.")
    );
    assert_eq!(
        validate_register(" ", "b@x.com", "a", "a", WeightUnit::Kg),
        Err("Preencha todos os campos.")
    );
    let ok = validate_register(" Bia ", " b@x.com ", "a", "a", WeightUnit::Kg).unwrap();
    assert_eq!(ok.name, "Bia");
    assert_eq!(ok.email, "b@x.com");
}
