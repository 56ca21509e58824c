use super::*;

// =============================================================
// NoticeState queue behavior
// =============================================================

#[test]
fn notice_state_default_is_empty() {
    let state = NoticeState::default();
    assert!(state.items.is_empty());
}

#[test]
fn success_and_error_record_kind_and_message() {
    let mut state = NoticeState::default();
    state.success("Incident created".to_owned());
    state.error("Request failed".to_owned());

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].kind, NoticeKind::Success);
    assert_eq!(state.items[0].message, "Incident created");
    assert_eq!(state.items[1].kind, NoticeKind::Error);
    assert_eq!(state.items[1].message, "Request failed");
}

#[test]
fn notices_get_unique_ids() {
    let mut state = NoticeState::default();
    state.success("one".to_owned());
    state.success("two".to_owned());

    assert_ne!(state.items[0].id, state.items[1].id);
}

#[test]
fn queue_drops_oldest_past_the_cap() {
    let mut state = NoticeState::default();
    for n in 0..6 {
        state.success(format!("notice {n}"));
    }

    assert_eq!(state.items.len(), 4);
    assert_eq!(state.items[0].message, "notice 2");
    assert_eq!(state.items[3].message, "notice 5");
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticeState::default();
    state.success("keep".to_owned());
    state.error("drop".to_owned());
    let id = state.items[1].id.clone();

    state.dismiss(&id);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "keep");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NoticeState::default();
    state.success("keep".to_owned());

    state.dismiss("no-such-id");

    assert_eq!(state.items.len(), 1);
}
