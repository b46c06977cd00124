use super::*;

fn alice() -> SessionUser {
    SessionUser { id: "6f1c".to_owned(), email: Some("alice.tan@uni.edu".to_owned()) }
}

#[test]
fn guest_sentinel_matches_fixed_shape() {
    let guest = Identity::guest();
    assert_eq!(guest.id, None);
    assert_eq!(guest.username, "Guest");
    assert_eq!(guest.email, "");
    assert_eq!(guest.role, "");
    assert_eq!(guest.avatar_url, DEFAULT_AVATAR_URL);
    assert!(!guest.is_signed_in());
}

#[test]
fn loading_placeholder_is_not_signed_in() {
    let loading = Identity::default();
    assert_eq!(loading.username, "Guest User");
    assert_eq!(loading.email, "Loading...");
    assert!(!loading.is_signed_in());
}

#[test]
fn full_row_overrides_every_default() {
    let row = ProfileRow {
        username: Some("alice".to_owned()),
        role: Some("recruiter".to_owned()),
        avatar_url: Some("https://x/y.png".to_owned()),
    };
    let identity = merge_profile(&ProfileDefaults::default(), &alice(), Some(&row));
    assert_eq!(
        identity,
        Identity {
            id: Some("6f1c".to_owned()),
            username: "alice".to_owned(),
            email: "alice.tan@uni.edu".to_owned(),
            role: "recruiter".to_owned(),
            avatar_url: "https://x/y.png".to_owned(),
        }
    );
    assert!(identity.is_signed_in());
}

#[test]
fn missing_username_uses_email_local_part() {
    let row = ProfileRow { role: Some("Student".to_owned()), ..ProfileRow::default() };
    let identity = merge_profile(&ProfileDefaults::default(), &alice(), Some(&row));
    assert_eq!(identity.username, "alice.tan");
}

#[test]
fn empty_username_counts_as_missing() {
    let row = ProfileRow { username: Some(String::new()), ..ProfileRow::default() };
    let identity = merge_profile(&ProfileDefaults::default(), &alice(), Some(&row));
    assert_eq!(identity.username, "alice.tan");
}

#[test]
fn missing_avatar_uses_default_avatar() {
    let row = ProfileRow { username: Some("alice".to_owned()), ..ProfileRow::default() };
    let identity = merge_profile(&ProfileDefaults::default(), &alice(), Some(&row));
    assert_eq!(identity.avatar_url, DEFAULT_AVATAR_URL);
}

#[test]
fn missing_row_falls_back_to_defaults() {
    let identity = merge_profile(&ProfileDefaults::default(), &alice(), None);
    assert_eq!(identity.id.as_deref(), Some("6f1c"));
    assert_eq!(identity.username, "alice.tan");
    assert_eq!(identity.role, FALLBACK_ROLE);
    assert_eq!(identity.avatar_url, DEFAULT_AVATAR_URL);
}

#[test]
fn custom_defaults_are_respected() {
    let defaults = ProfileDefaults { role: "Company".to_owned(), avatar_url: "https://cdn/a.png".to_owned() };
    let identity = merge_profile(&defaults, &alice(), None);
    assert_eq!(identity.role, "Company");
    assert_eq!(identity.avatar_url, "https://cdn/a.png");
}

#[test]
fn session_without_email_gets_fallback_username() {
    let user = SessionUser { id: "p1".to_owned(), email: None };
    let identity = merge_profile(&ProfileDefaults::default(), &user, None);
    assert_eq!(identity.username, FALLBACK_USERNAME);
    assert_eq!(identity.email, "");
    assert!(identity.is_signed_in());
}

#[test]
fn email_local_part_edge_cases() {
    assert_eq!(email_local_part("bob@x.io"), Some("bob"));
    assert_eq!(email_local_part("no-at-sign"), Some("no-at-sign"));
    assert_eq!(email_local_part("@x.io"), None);
    assert_eq!(email_local_part(""), None);
}

#[test]
fn avatar_src_never_empty() {
    let mut identity = Identity::guest();
    identity.avatar_url = String::new();
    assert_eq!(identity.avatar_src(), DEFAULT_AVATAR_URL);
}
