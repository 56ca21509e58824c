//! Backend endpoint table.
//!
//! Every REST path is built here so pages and wrappers never hand-assemble
//! URLs. Paths are relative to the host; the app is served behind the same
//! origin as the API.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const API_BASE: &str = "/api";

// =============================================================
// Auth
// =============================================================

pub fn login() -> String {
    format!("{API_BASE}/auth/login")
}

pub fn register() -> String {
    format!("{API_BASE}/auth/register")
}

// =============================================================
// Incidents
// =============================================================

pub fn incidents() -> String {
    format!("{API_BASE}/incidents")
}

pub fn incident(id: i64) -> String {
    format!("{API_BASE}/incidents/{id}")
}

pub fn incidents_by_user(user_id: i64) -> String {
    format!("{API_BASE}/incidents/user/{user_id}")
}

pub fn incident_upload() -> String {
    format!("{API_BASE}/incidents/upload")
}

pub fn incident_download(filename: &str) -> String {
    format!("{API_BASE}/incidents/download/{filename}")
}

// =============================================================
// Attachments
// =============================================================

pub fn attachments() -> String {
    format!("{API_BASE}/attachments")
}

pub fn attachment(id: i64) -> String {
    format!("{API_BASE}/attachments/{id}")
}

pub fn attachments_by_incident(incident_id: i64) -> String {
    format!("{API_BASE}/attachments/incident/{incident_id}")
}

// =============================================================
// Users, roles, statuses
// =============================================================

pub fn users() -> String {
    format!("{API_BASE}/users")
}

pub fn user(id: i64) -> String {
    format!("{API_BASE}/users/{id}")
}

pub fn roles() -> String {
    format!("{API_BASE}/roles")
}

pub fn role(id: i64) -> String {
    format!("{API_BASE}/roles/{id}")
}

pub fn statuses() -> String {
    format!("{API_BASE}/statuses")
}

pub fn status(id: i64) -> String {
    format!("{API_BASE}/statuses/{id}")
}
