use super::*;
use crate::net::types::{User, WeightUnit};

#[test]
fn should_redirect_unauth_when_loaded_and_token_missing() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::pending()));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = SessionState {
        token: Some("tok".to_owned()),
        user: Some(User {
            id: 1,
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            weight_unit: WeightUnit::Kg,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn cached_user_without_token_still_redirects() {
    let state = SessionState {
        token: None,
        user: Some(User {
            id: 1,
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            weight_unit: WeightUnit::Kg,
        }),
        loading: false,
    };
    assert!(should_redirect_unauth(&state));
}

fn signed_in() -> SessionState {
    SessionState { token: Some("tok".to_owned()), user: None, loading: false }
}

#[test]
fn access_check_waits_for_storage_then_settles() {
    let check = next_access_check(AccessCheck::Waiting, &SessionState::pending());
    assert_eq!(check, AccessCheck::Waiting);
    assert_eq!(next_access_check(check, &signed_in()), AccessCheck::Settled);
}

#[test]
fn access_check_redirects_when_loaded_without_token() {
    assert_eq!(next_access_check(AccessCheck::Waiting, &SessionState::default()), AccessCheck::Redirect);
}

#[test]
fn token_cleared_after_settling_does_not_redirect() {
    let check = next_access_check(AccessCheck::Waiting, &signed_in());
    assert_eq!(check, AccessCheck::Settled);

    // A 401 drops the token; the page keeps its visitor.
    let after_unauthorized = SessionState { token: None, ..signed_in() };
    assert_eq!(next_access_check(check, &after_unauthorized), AccessCheck::Settled);
}
