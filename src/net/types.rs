#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope wrapping every backend payload.
///
/// `data` carries the resource, `detail` a human-readable outcome message.
/// `token` is only populated by the login endpoint; `length` accompanies
/// list responses on some routes. Unknown extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

/// Marker object returned by delete endpoints inside `data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deletion {
    #[serde(default)]
    pub deleted: bool,
}

// =============================================================
// Domain records (read side)
// =============================================================

/// An account that can sign in to the dashboard.
///
/// The backend may include credential fields on user records; they are
/// deliberately not modeled here, so they are dropped on deserialization
/// and never reach the persisted session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cedula: String,
    pub email: String,
    pub username: String,
    pub role_id: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// An incident report. List endpoints may embed the related status, the
/// reporting user, and the attachment records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status_id: i64,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Vec<Attachment>>,
}

/// A file stored for an incident. `attachment_path` is the server-side
/// path; only its basename is meaningful to the client (download URL).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub incident_id: i64,
    pub attachment_path: String,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================
// Write payloads
// =============================================================

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub cedula: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Create/update body for users. `password` is omitted on update unless
/// the form sets a new one.
#[derive(Clone, Debug, Serialize)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub cedula: String,
    pub username: String,
    pub email: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct IncidentPayload {
    pub title: String,
    pub description: String,
    pub status_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RolePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatusPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AttachmentPayload {
    pub incident_id: i64,
    pub attachment_path: String,
}
