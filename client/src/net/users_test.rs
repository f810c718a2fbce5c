use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::mock_transport::{MockTransport, TEST_BASE_URL, test_client};
use crate::net::types::WeightUnit;

fn cached_user() -> User {
    User {
        id: 2,
        name: "Caio".to_owned(),
        email: "caio@example.com".to_owned(),
        weight_unit: WeightUnit::Kg,
    }
}

#[test]
fn load_profile_prefers_cached_user() {
    let api = test_client(MockTransport::new());
    api.session().save("tok", &cached_user());
    assert_eq!(block_on(load_profile(&api)).unwrap(), cached_user());
    assert!(api.transport().requests().is_empty());
}

#[test]
fn load_profile_fetches_when_cache_is_empty() {
    let api = test_client(MockTransport::new().respond(200, serde_json::to_value(cached_user()).unwrap()));
    assert_eq!(block_on(load_profile(&api)).unwrap(), cached_user());
    let request = api.transport().last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, format!("{TEST_BASE_URL}/users/profile"));
}

#[test]
fn update_profile_mirrors_into_cache() {
    let api = test_client(MockTransport::new().respond(200, serde_json::json!({ "ok": true })));
    api.session().save("tok", &cached_user());
    let update = ProfileUpdate {
        name: "Caio S.".to_owned(),
        email: "caio.s@example.com".to_owned(),
        weight_unit: WeightUnit::Lbs,
    };

    block_on(update_profile(&api, &update)).unwrap();

    let user = api.session().user().unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Caio S.");
    assert_eq!(user.email, "caio.s@example.com");
    assert_eq!(user.weight_unit, WeightUnit::Lbs);
    assert_eq!(api.transport().last_request().method, Method::Put);
}

#[test]
fn failed_profile_update_leaves_cache() {
    let api = test_client(MockTransport::new().respond(422, serde_json::json!({ "message": "Email em uso" })));
    api.session().save("tok", &cached_user());
    let update = ProfileUpdate {
        name: "Outro".to_owned(),
        email: "x@example.com".to_owned(),
        weight_unit: WeightUnit::Kg,
    };
    let err = block_on(update_profile(&api, &update)).unwrap_err();
    assert_eq!(err.server_message(), Some("Email em uso"));
    assert_eq!(api.session().user(), Some(cached_user()));
}

#[test]
fn change_password_and_preferences_hit_their_paths() {
    let api = test_client(MockTransport::new().respond_raw(204, "").respond_raw(204, ""));
    let change = validate_password_change("old", "new", "new").unwrap();
    block_on(change_password(&api, &change)).unwrap();
    block_on(update_preferences(&api, &Preferences::default())).unwrap();

    let requests = api.transport().requests();
    assert_eq!(requests[0].url, format!("{TEST_BASE_URL}/users/password"));
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({ "currentPassword": "old", "newPassword": "new" }))
    );
    assert_eq!(requests[1].url, format!("{TEST_BASE_URL}/users/preferences"));
    assert_eq!(
        requests[1].body,
        Some(serde_json::json!({ "weightUnit": "kg", "enableNotifications": true, "autoBackup": true }))
    );
}

#[test]
fn validate_password_change_rejects_mismatch() {
    assert_eq!(
        validate_password_change("old", "a", "b"),
        Err("A nova senha e a confirmação da senha devem ser iguais.")
    );
    assert_eq!(
        validate_password_change("", "a", "a"),
        Err("Preencha a senha atual e a nova senha.")
    );
}
