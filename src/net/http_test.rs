use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        id: 7,
        first_name: "Ana".to_owned(),
        last_name: "Mora".to_owned(),
        cedula: "1102334455".to_owned(),
        email: "ana.mora@example.com".to_owned(),
        username: "amora".to_owned(),
        role_id: 1,
        created_at: "2025-03-01T10:00:00.000Z".to_owned(),
        updated_at: "2025-03-01T10:00:00.000Z".to_owned(),
        role: None,
    }
}

fn signed_in() -> Session {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());
    session
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn header_present_for_signed_in_session() {
    assert_eq!(
        authorization_header(&signed_in()).as_deref(),
        Some("Bearer tok-abc")
    );
}

#[test]
fn header_absent_for_signed_out_session() {
    assert_eq!(authorization_header(&Session::default()), None);
}

#[test]
fn header_is_fixed_at_dispatch_time() {
    let mut session = signed_in();
    let header = authorization_header(&session);

    // A logout after dispatch must not affect the header already computed.
    session.logout();

    assert_eq!(header.as_deref(), Some("Bearer tok-abc"));
    assert_eq!(authorization_header(&session), None);
}

// =============================================================
// Token-rejection keyword match
// =============================================================

#[test]
fn token_rejection_matches_known_phrasings() {
    assert!(is_token_rejection("Token expired"));
    assert!(is_token_rejection("invalid token"));
    assert!(is_token_rejection("Signature has expired"));
    assert!(is_token_rejection("INVALID SIGNATURE"));
}

#[test]
fn token_rejection_matches_credential_wording_too() {
    // "invalid" is in the keyword list, so credential failures match;
    // the login-path exemption is what keeps them from tearing down.
    assert!(is_token_rejection("Invalid credentials"));
}

#[test]
fn token_rejection_ignores_unrelated_details() {
    assert!(!is_token_rejection("User not found"));
    assert!(!is_token_rejection("wrong password"));
    assert!(!is_token_rejection(""));
}

// =============================================================
// Session-expiry decision
// =============================================================

#[test]
fn expires_on_authenticated_401_with_token_detail() {
    assert!(should_expire_session(
        &signed_in(),
        401,
        "Token expired",
        "/incidents"
    ));
}

#[test]
fn login_page_401_never_expires() {
    assert!(!should_expire_session(
        &signed_in(),
        401,
        "Invalid credentials",
        "/login"
    ));
}

#[test]
fn unauthenticated_401_never_expires() {
    assert!(!should_expire_session(
        &Session::default(),
        401,
        "Token expired",
        "/incidents"
    ));
}

#[test]
fn non_401_never_expires() {
    assert!(!should_expire_session(
        &signed_in(),
        403,
        "Token expired",
        "/incidents"
    ));
    assert!(!should_expire_session(
        &signed_in(),
        500,
        "token mangled",
        "/incidents"
    ));
}

#[test]
fn unrelated_401_detail_never_expires() {
    assert!(!should_expire_session(
        &signed_in(),
        401,
        "insufficient permissions",
        "/incidents"
    ));
}

#[test]
fn second_401_after_teardown_does_not_match() {
    let mut session = signed_in();
    assert!(should_expire_session(&session, 401, "Token expired", "/"));

    // Teardown flips the flag; a straggler 401 from an in-flight request
    // must classify as an ordinary error, so the redirect fires once.
    session.logout();
    assert!(!should_expire_session(&session, 401, "Token expired", "/"));
}

// =============================================================
// Error body handling
// =============================================================

#[test]
fn extract_detail_reads_envelope_bodies() {
    assert_eq!(
        extract_detail(r#"{"data": null, "detail": "Token expired"}"#).as_deref(),
        Some("Token expired")
    );
}

#[test]
fn extract_detail_rejects_non_json_and_missing_field() {
    assert_eq!(extract_detail("<html>502</html>"), None);
    assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
}

#[test]
fn status_error_displays_the_detail() {
    let err = ApiError::Status {
        status: 404,
        detail: "Incident not found".to_owned(),
    };
    assert_eq!(err.to_string(), "Incident not found");
    assert!(!err.is_session_expired());
}

#[test]
fn session_expired_is_marked_handled() {
    assert!(ApiError::SessionExpired.is_session_expired());
    assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
}
