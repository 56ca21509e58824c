//! Persisted session record in `localStorage`.
//!
//! The signed-in session survives page reloads: the root component writes
//! it here on every change and reads it back once at startup, before any
//! route guard runs. Requires a browser environment; the native fallbacks
//! behave as an empty store.

use crate::state::session::Session;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "incident_desk_session";

/// Read the persisted session, if a valid record exists.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Write the session, or remove the record when it is signed out.
pub fn save_session(session: &Session) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if session.is_authenticated {
            if let Ok(json) = serde_json::to_string(session) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        } else {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}
