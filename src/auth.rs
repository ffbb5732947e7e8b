//! Authentication Module
//!
//! Holds the in-memory team/user identity for this device.

use tracing::info;

/// User id reconstructed when a session is restored from storage.
///
/// Only the team id is persisted; the store never records a real user id.
pub const RESTORED_USER_ID: i64 = 1;

/// Session identity. Logged in iff both ids are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub team_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.team_id.is_some() && self.user_id.is_some()
    }

    /// Both ids, if logged in.
    pub fn credentials(&self) -> Option<(i64, i64)> {
        Some((self.team_id?, self.user_id?))
    }
}

/// Manages the session identity.
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    /// Create a manager with no session.
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    /// Adopt an identity recovered from storage.
    ///
    /// The user id comes back as [`RESTORED_USER_ID`], not whatever was
    /// supplied at login.
    pub fn restore(&mut self, team_id: i64) {
        info!("Session restored for team {}", team_id);
        self.session = Session {
            team_id: Some(team_id),
            user_id: Some(RESTORED_USER_ID),
        };
    }

    /// Set the current identity.
    pub fn set(&mut self, team_id: i64, user_id: i64) {
        info!("Session set for team {} user {}", team_id, user_id);
        self.session = Session {
            team_id: Some(team_id),
            user_id: Some(user_id),
        };
    }

    /// Clear the current identity.
    pub fn clear(&mut self) {
        info!("Session cleared");
        self.session = Session::default();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Check if currently logged in.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
