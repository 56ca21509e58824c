use super::*;

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

// =============================================================
// Session transitions
// =============================================================

#[test]
fn login_sets_user_token_and_flag() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());

    assert_eq!(session.user, Some(sample_user()));
    assert_eq!(session.token.as_deref(), Some("tok-abc"));
    assert!(session.is_authenticated);
}

#[test]
fn login_overwrites_previous_session() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-old".to_owned());

    let mut other = sample_user();
    other.id = 8;
    other.username = "bvega".to_owned();
    session.login(other.clone(), "tok-new".to_owned());

    assert_eq!(session.user, Some(other));
    assert_eq!(session.token.as_deref(), Some("tok-new"));
    assert!(session.is_authenticated);
}

#[test]
fn logout_clears_everything() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());
    session.logout();

    assert_eq!(session, Session::default());
}

#[test]
fn logout_is_idempotent() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());
    session.logout();
    session.logout();

    assert_eq!(session, Session::default());
}

#[test]
fn logout_on_fresh_session_is_a_noop() {
    let mut session = Session::default();
    session.logout();

    assert_eq!(session, Session::default());
}

// =============================================================
// Persistence round-trip
// =============================================================

#[test]
fn session_round_trips_through_serde() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
}

#[test]
fn empty_session_round_trips_through_serde() {
    let session = Session::default();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    let mut session = Session::default();
    session.login(sample_user(), "tok-abc".to_owned());

    assert_eq!(session.display_name(), "Ana Mora");
}

#[test]
fn display_name_empty_when_signed_out() {
    assert_eq!(Session::default().display_name(), "");
}

// =============================================================
// SessionState rehydration
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.session.is_authenticated);
}

#[test]
fn finish_restore_applies_stored_session() {
    let mut stored = Session::default();
    stored.login(sample_user(), "tok-abc".to_owned());

    let mut state = SessionState::default();
    state.finish_restore(Some(stored.clone()));

    assert!(!state.loading);
    assert_eq!(state.session, stored);
}

#[test]
fn finish_restore_without_record_clears_loading() {
    let mut state = SessionState::default();
    state.finish_restore(None);

    assert!(!state.loading);
    assert_eq!(state.session, Session::default());
}
