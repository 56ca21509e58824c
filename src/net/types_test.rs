use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn login_envelope_carries_user_and_token() {
    let body = r#"{
        "data": {
            "id": 3,
            "first_name": "Luis",
            "last_name": "Paz",
            "cedula": "0912345678",
            "email": "luis.paz@example.com",
            "username": "lpaz",
            "password": "",
            "role_id": 2,
            "created_at": "2025-02-10T08:30:00.000Z",
            "updated_at": "2025-02-10T08:30:00.000Z"
        },
        "detail": "Welcome back",
        "token": "jwt-token-value"
    }"#;

    let env: Envelope<User> = serde_json::from_str(body).unwrap();
    assert_eq!(env.data.username, "lpaz");
    assert_eq!(env.token.as_deref(), Some("jwt-token-value"));
    assert_eq!(env.detail, "Welcome back");
    assert!(env.length.is_none());
}

#[test]
fn list_envelope_without_token_decodes() {
    let body = r#"{
        "data": [],
        "detail": "OK",
        "length": 0
    }"#;

    let env: Envelope<Vec<Incident>> = serde_json::from_str(body).unwrap();
    assert!(env.data.is_empty());
    assert!(env.token.is_none());
    assert_eq!(env.length, Some(0));
}

#[test]
fn envelope_tolerates_missing_detail() {
    let body = r#"{"data": {"deleted": true}}"#;

    let env: Envelope<Deletion> = serde_json::from_str(body).unwrap();
    assert!(env.data.deleted);
    assert_eq!(env.detail, "");
}

#[test]
fn delete_envelope_decodes_marker() {
    let body = r#"{"data": {"deleted": true}, "detail": "Incident deleted"}"#;

    let env: Envelope<Deletion> = serde_json::from_str(body).unwrap();
    assert!(env.data.deleted);
    assert_eq!(env.detail, "Incident deleted");
}

#[test]
fn delete_marker_defaults_when_shape_drifts() {
    let body = r#"{"data": {}, "detail": "Removed"}"#;

    let env: Envelope<Deletion> = serde_json::from_str(body).unwrap();
    assert!(!env.data.deleted);
}

// =============================================================
// Domain records
// =============================================================

#[test]
fn user_drops_credential_fields_from_the_wire() {
    let body = r#"{
        "id": 1,
        "first_name": "Ana",
        "last_name": "Mora",
        "cedula": "1102334455",
        "email": "ana.mora@example.com",
        "username": "amora",
        "password": "$2b$10$hash",
        "token": "stale-token",
        "role_id": 1,
        "created_at": "2025-01-05T12:00:00.000Z",
        "updated_at": "2025-01-05T12:00:00.000Z",
        "role": {
            "id": 1,
            "name": "admin",
            "created_at": "2025-01-01T00:00:00.000Z",
            "updated_at": "2025-01-01T00:00:00.000Z"
        }
    }"#;

    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.role.as_ref().map(|r| r.name.as_str()), Some("admin"));

    // Re-serializing must not resurrect credentials.
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("stale-token"));
    assert!(!json.contains("$2b$10$hash"));
}

#[test]
fn incident_decodes_with_embedded_relations() {
    let body = r#"{
        "id": 12,
        "title": "Printer on fire",
        "description": "Third floor printer is smoking",
        "status_id": 1,
        "user_id": 3,
        "response": null,
        "created_at": "2025-04-02T09:00:00.000Z",
        "updated_at": "2025-04-02T09:05:00.000Z",
        "status": {
            "id": 1,
            "name": "pending",
            "created_at": "2025-01-01T00:00:00.000Z",
            "updated_at": "2025-01-01T00:00:00.000Z"
        },
        "attachment": [
            {
                "id": 5,
                "incident_id": 12,
                "attachment_path": "uploads/1743584700-photo.jpg",
                "created_at": "2025-04-02T09:01:00.000Z",
                "updated_at": "2025-04-02T09:01:00.000Z"
            }
        ]
    }"#;

    let incident: Incident = serde_json::from_str(body).unwrap();
    assert_eq!(incident.status.as_ref().map(|s| s.name.as_str()), Some("pending"));
    assert_eq!(incident.attachment.as_ref().map(Vec::len), Some(1));
    assert!(incident.user.is_none());
    assert!(incident.response.is_none());
}

#[test]
fn incident_decodes_without_embedded_relations() {
    let body = r#"{
        "id": 12,
        "title": "Printer on fire",
        "description": "Third floor printer is smoking",
        "status_id": 1,
        "user_id": 3,
        "created_at": "2025-04-02T09:00:00.000Z",
        "updated_at": "2025-04-02T09:05:00.000Z"
    }"#;

    let incident: Incident = serde_json::from_str(body).unwrap();
    assert!(incident.status.is_none());
    assert!(incident.attachment.is_none());
}

// =============================================================
// Write payloads
// =============================================================

#[test]
fn user_payload_omits_password_when_unset() {
    let payload = UserPayload {
        first_name: "Ana".to_owned(),
        last_name: "Mora".to_owned(),
        cedula: "1102334455".to_owned(),
        username: "amora".to_owned(),
        email: "ana.mora@example.com".to_owned(),
        role_id: 2,
        password: None,
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("password"));
}

#[test]
fn user_payload_includes_password_when_set() {
    let payload = UserPayload {
        first_name: "Ana".to_owned(),
        last_name: "Mora".to_owned(),
        cedula: "1102334455".to_owned(),
        username: "amora".to_owned(),
        email: "ana.mora@example.com".to_owned(),
        role_id: 2,
        password: Some("s3cret".to_owned()),
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("\"password\":\"s3cret\""));
}

#[test]
fn incident_payload_omits_empty_response() {
    let payload = IncidentPayload {
        title: "Broken door".to_owned(),
        description: "Main entrance".to_owned(),
        status_id: 1,
        user_id: 3,
        response: None,
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("response"));
}
