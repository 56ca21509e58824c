use super::*;
use crate::net::types::User;
use crate::state::session::Session;

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

fn state(authenticated: bool, loading: bool) -> SessionState {
    let mut session = Session::default();
    if authenticated {
        session.login(sample_user(), "tok-abc".to_owned());
    }
    SessionState { session, loading }
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn no_redirect_while_rehydrating() {
    // Before the stored session is read back, neither guard may act.
    assert!(!needs_login(&state(false, true)));
    assert!(!already_signed_in(&state(true, true)));
}

#[test]
fn signed_out_page_bounces_to_login() {
    assert!(needs_login(&state(false, false)));
}

#[test]
fn signed_in_page_stays_put() {
    assert!(!needs_login(&state(true, false)));
}

#[test]
fn signed_in_user_leaves_the_login_page() {
    assert!(already_signed_in(&state(true, false)));
}

#[test]
fn signed_out_user_stays_on_the_login_page() {
    assert!(!already_signed_in(&state(false, false)));
}
