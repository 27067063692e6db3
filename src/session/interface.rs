use crate::error::AppError;
use crate::session::session::Session;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Token and username kept between runs so a session can be restored without a password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for StoredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = json!({
            "username": self.username,
            "token": "[REDACTED]",
        });
        write!(f, "{}", value)
    }
}

/// Result of trying to re-establish a session from stored credentials.
///
/// Never an error: a failed restore degrades to logged out, but callers can
/// still tell "nothing stored" apart from "stored but rejected".
#[derive(Debug)]
pub enum RestoreOutcome {
    Restored(Session),
    NoStoredCredentials,
    Rejected(AppError),
}

impl RestoreOutcome {
    pub fn session(self) -> Option<Session> {
        match self {
            RestoreOutcome::Restored(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_restored(&self) -> bool {
        matches!(self, RestoreOutcome::Restored(_))
    }
}

/// Membership of one story in one session's favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorited,
    Favorited,
}

impl FavoriteState {
    pub fn toggled(self) -> Self {
        match self {
            FavoriteState::NotFavorited => FavoriteState::Favorited,
            FavoriteState::Favorited => FavoriteState::NotFavorited,
        }
    }
}
