use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  hr@acme.io ", "hunter2"),
        Ok(("hr@acme.io".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("", "hunter2"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("   ", "hunter2"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("hr@acme.io", ""), Err("Enter both email and password."));
}

#[test]
fn home_route_for_role_maps_known_roles() {
    assert_eq!(home_route_for_role(Some("Company")), "/company-home-page");
    assert_eq!(home_route_for_role(Some("Student")), "/student/dashboard");
    assert_eq!(home_route_for_role(Some("Academic Advisor")), "/advisorHomePage");
    assert_eq!(home_route_for_role(Some("Admin")), "/admin/users");
}

#[test]
fn home_route_for_role_falls_back_to_home() {
    assert_eq!(home_route_for_role(None), "/home");
    assert_eq!(home_route_for_role(Some("company")), "/home");
    assert_eq!(home_route_for_role(Some("Recruiter")), "/home");
}

#[test]
fn failure_message_uses_backend_wording() {
    let err = BackendError::Status { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(sign_in_failure_message(&err), "Sign-in failed: Invalid login credentials");
}

#[test]
fn failure_message_describes_transport_errors() {
    assert_eq!(
        sign_in_failure_message(&BackendError::Timeout(15_000)),
        "Sign-in failed: request timed out after 15000 ms"
    );
}

#[test]
fn validate_sign_in_input_keeps_password_as_typed() {
    assert_eq!(
        validate_sign_in_input("  a@b.c ", "  secret  "),
        Ok(("a@b.c".to_owned(), "  secret  ".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_accepts_whitespace_only_password() {
    assert_eq!(
        validate_sign_in_input("a@b.c", "   "),
        Ok(("a@b.c".to_owned(), "   ".to_owned()))
    );
}
