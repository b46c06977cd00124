use super::*;

#[test]
fn auth_session_decodes_token_endpoint_payload() {
    let raw = serde_json::json!({
        "access_token": "jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_760_000_000,
        "refresh_token": "r1",
        "user": {
            "id": "6f1c",
            "aud": "authenticated",
            "email": "alice@uni.edu",
            "app_metadata": { "provider": "email" }
        }
    });
    let session: AuthSession = serde_json::from_value(raw).unwrap();
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.expires_at, Some(1_760_000_000));
    assert_eq!(session.user.email.as_deref(), Some("alice@uni.edu"));
}

#[test]
fn auth_session_tolerates_missing_optional_fields() {
    let raw = serde_json::json!({
        "access_token": "jwt",
        "refresh_token": "r1",
        "user": { "id": "6f1c" }
    });
    let session: AuthSession = serde_json::from_value(raw).unwrap();
    assert_eq!(session.token_type, "bearer");
    assert_eq!(session.expires_in, 0);
    assert_eq!(session.user.email, None);
}

#[test]
fn profile_row_treats_empty_strings_as_absent() {
    let row: ProfileRow = serde_json::from_value(serde_json::json!({
        "username": "",
        "role": "Company",
        "avatar_url": null
    }))
    .unwrap();
    assert_eq!(row.username(), None);
    assert_eq!(row.role(), Some("Company"));
    assert_eq!(row.avatar_url(), None);
}

#[test]
fn session_event_constructors_track_presence() {
    let user = SessionUser { id: "u1".to_owned(), email: None };
    assert!(SessionEvent::signed_in(user.clone()).has_session());
    assert!(SessionEvent::token_refreshed(user).has_session());
    assert!(!SessionEvent::signed_out().has_session());
    assert_eq!(SessionEvent::signed_out().kind, SessionEventKind::SignedOut);
}
