//! Typed wrappers for every backend operation.
//!
//! Each wrapper is one thin call through the [`Gateway`]; pages never
//! build URLs or touch headers themselves. All functions return the
//! decoded envelope so callers can use both the payload and the backend's
//! `detail` message.

use super::endpoints;
use super::http::{ApiError, Gateway};
use super::types::{
    Attachment, AttachmentPayload, Credentials, Deletion, Envelope, Incident, IncidentPayload,
    RegisterPayload, Role, RolePayload, Status, StatusPayload, User, UserPayload,
};

// =============================================================
// Auth
// =============================================================

/// Sign in with email and password. The envelope's `token` field carries
/// the bearer token on success.
pub async fn login_user(gw: Gateway, credentials: &Credentials) -> Result<Envelope<User>, ApiError> {
    gw.post(&endpoints::login(), credentials).await
}

/// Register a new account. Returns the created user without a token;
/// the account signs in normally afterwards.
pub async fn register_user(gw: Gateway, payload: &RegisterPayload) -> Result<Envelope<User>, ApiError> {
    gw.post(&endpoints::register(), payload).await
}

// =============================================================
// Incidents
// =============================================================

pub async fn get_incidents(gw: Gateway) -> Result<Envelope<Vec<Incident>>, ApiError> {
    gw.get(&endpoints::incidents()).await
}

pub async fn get_incident_by_id(gw: Gateway, id: i64) -> Result<Envelope<Incident>, ApiError> {
    gw.get(&endpoints::incident(id)).await
}

/// Incidents reported by one user.
pub async fn get_incidents_by_user(
    gw: Gateway,
    user_id: i64,
) -> Result<Envelope<Vec<Incident>>, ApiError> {
    gw.get(&endpoints::incidents_by_user(user_id)).await
}

pub async fn create_incident(
    gw: Gateway,
    payload: &IncidentPayload,
) -> Result<Envelope<Incident>, ApiError> {
    gw.post(&endpoints::incidents(), payload).await
}

pub async fn update_incident(
    gw: Gateway,
    id: i64,
    payload: &IncidentPayload,
) -> Result<Envelope<Incident>, ApiError> {
    gw.put(&endpoints::incident(id), payload).await
}

pub async fn delete_incident(gw: Gateway, id: i64) -> Result<Envelope<Deletion>, ApiError> {
    gw.delete(&endpoints::incident(id)).await
}

/// Upload a file for an incident as multipart form data. The form carries
/// an `incident_id` field and the `file` itself; the backend answers with
/// the created attachment records.
#[cfg(feature = "csr")]
pub async fn upload_incident(
    gw: Gateway,
    form: &web_sys::FormData,
) -> Result<Envelope<Vec<Attachment>>, ApiError> {
    gw.post_form(&endpoints::incident_upload(), form).await
}

/// Download a stored file by its basename. Returns the raw bytes.
pub async fn download_incident(gw: Gateway, filename: &str) -> Result<Vec<u8>, ApiError> {
    gw.get_bytes(&endpoints::incident_download(filename)).await
}

// =============================================================
// Attachments
// =============================================================

pub async fn get_attachments(gw: Gateway) -> Result<Envelope<Vec<Attachment>>, ApiError> {
    gw.get(&endpoints::attachments()).await
}

pub async fn get_attachments_by_incident(
    gw: Gateway,
    incident_id: i64,
) -> Result<Envelope<Vec<Attachment>>, ApiError> {
    gw.get(&endpoints::attachments_by_incident(incident_id)).await
}

pub async fn update_attachment(
    gw: Gateway,
    id: i64,
    payload: &AttachmentPayload,
) -> Result<Envelope<Attachment>, ApiError> {
    gw.put(&endpoints::attachment(id), payload).await
}

pub async fn delete_attachment(gw: Gateway, id: i64) -> Result<Envelope<Deletion>, ApiError> {
    gw.delete(&endpoints::attachment(id)).await
}

// =============================================================
// Users
// =============================================================

pub async fn get_users(gw: Gateway) -> Result<Envelope<Vec<User>>, ApiError> {
    gw.get(&endpoints::users()).await
}

pub async fn create_user(gw: Gateway, payload: &UserPayload) -> Result<Envelope<User>, ApiError> {
    gw.post(&endpoints::users(), payload).await
}

pub async fn update_user(
    gw: Gateway,
    id: i64,
    payload: &UserPayload,
) -> Result<Envelope<User>, ApiError> {
    gw.put(&endpoints::user(id), payload).await
}

pub async fn delete_user(gw: Gateway, id: i64) -> Result<Envelope<Deletion>, ApiError> {
    gw.delete(&endpoints::user(id)).await
}

// =============================================================
// Roles
// =============================================================

pub async fn get_roles(gw: Gateway) -> Result<Envelope<Vec<Role>>, ApiError> {
    gw.get(&endpoints::roles()).await
}

pub async fn create_role(gw: Gateway, payload: &RolePayload) -> Result<Envelope<Role>, ApiError> {
    gw.post(&endpoints::roles(), payload).await
}

pub async fn update_role(
    gw: Gateway,
    id: i64,
    payload: &RolePayload,
) -> Result<Envelope<Role>, ApiError> {
    gw.put(&endpoints::role(id), payload).await
}

pub async fn delete_role(gw: Gateway, id: i64) -> Result<Envelope<Deletion>, ApiError> {
    gw.delete(&endpoints::role(id)).await
}

// =============================================================
// Statuses
// =============================================================

pub async fn get_statuses(gw: Gateway) -> Result<Envelope<Vec<Status>>, ApiError> {
    gw.get(&endpoints::statuses()).await
}

pub async fn create_status(
    gw: Gateway,
    payload: &StatusPayload,
) -> Result<Envelope<Status>, ApiError> {
    gw.post(&endpoints::statuses(), payload).await
}

pub async fn update_status(
    gw: Gateway,
    id: i64,
    payload: &StatusPayload,
) -> Result<Envelope<Status>, ApiError> {
    gw.put(&endpoints::status(id), payload).await
}

pub async fn delete_status(gw: Gateway, id: i64) -> Result<Envelope<Deletion>, ApiError> {
    gw.delete(&endpoints::status(id)).await
}
