use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// Authorization role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Snapshot of the authenticated user, as returned by the login endpoint.
///
/// The backend is authoritative; this is held in memory for the lifetime of
/// the session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// First letter of the display name, used for the avatar placeholder.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }
}
