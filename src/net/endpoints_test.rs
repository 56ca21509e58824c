use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn auth_paths() {
    assert_eq!(login(), "/api/auth/login");
    assert_eq!(register(), "/api/auth/register");
}

#[test]
fn incident_paths() {
    assert_eq!(incidents(), "/api/incidents");
    assert_eq!(incident(42), "/api/incidents/42");
    assert_eq!(incidents_by_user(3), "/api/incidents/user/3");
    assert_eq!(incident_upload(), "/api/incidents/upload");
    assert_eq!(
        incident_download("1743584700-photo.jpg"),
        "/api/incidents/download/1743584700-photo.jpg"
    );
}

#[test]
fn attachment_paths() {
    assert_eq!(attachments(), "/api/attachments");
    assert_eq!(attachment(5), "/api/attachments/5");
    assert_eq!(attachments_by_incident(12), "/api/attachments/incident/12");
}

#[test]
fn user_role_status_paths() {
    assert_eq!(users(), "/api/users");
    assert_eq!(user(7), "/api/users/7");
    assert_eq!(roles(), "/api/roles");
    assert_eq!(role(1), "/api/roles/1");
    assert_eq!(statuses(), "/api/statuses");
    assert_eq!(status(2), "/api/statuses/2");
}
