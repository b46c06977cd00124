use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_no_ops() {
    save_json("sb-test-auth-token", &serde_json::json!({ "access_token": "jwt" }));
    assert_eq!(load_json::<serde_json::Value>("sb-test-auth-token"), None);
    remove("sb-test-auth-token");
    assert_eq!(load_json::<serde_json::Value>("sb-test-auth-token"), None);
}
