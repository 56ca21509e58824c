#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// The authenticated session: signed-in user, bearer token, and flag.
///
/// `is_authenticated` is true exactly when a login succeeded: `token` holds
/// the bearer token and `user` holds the account the backend returned.
/// `login` and `logout` are the only transitions and both are total, so the
/// session can never hold a token without a user or vice versa.
///
/// This struct is also the record persisted to `localStorage`; it must
/// round-trip through serde without loss.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    /// Replace the session with a freshly authenticated one.
    pub fn login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
    }

    /// Reset to the signed-out session. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    /// Display name of the signed-in user, empty when signed out.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(String::new, |u| format!("{} {}", u.first_name, u.last_name))
    }
}

/// Session plus the rehydration flag consulted by route guards.
///
/// `loading` starts true and flips to false only after the persisted record
/// has been read back (or found absent). Guards must not redirect while it
/// is true, otherwise a page refresh would bounce a signed-in user to the
/// login page before the stored session is restored.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

impl SessionState {
    /// Apply the result of reading the persisted record and unblock guards.
    pub fn finish_restore(&mut self, restored: Option<Session>) {
        if let Some(session) = restored {
            self.session = session;
        }
        self.loading = false;
    }
}
