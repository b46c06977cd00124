//! Wire DTOs for the auth (GoTrue) and table (PostgREST) endpoints.
//!
//! DESIGN
//! ======
//! Only the fields the UI reads are modeled; serde ignores the rest so backend
//! additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account id (UUID string), also the `profiles` primary key.
    pub id: String,
    /// Sign-in email. Absent for phone or anonymous accounts.
    #[serde(default)]
    pub email: Option<String>,
}

/// Token bundle returned by the token endpoint and kept in `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    #[serde(default)]
    pub expires_in: u64,
    /// Expiry as seconds since the Unix epoch, when the backend reports it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Display attributes stored in the `profiles` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ProfileRow {
    /// Username if set and non-empty.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        non_empty(self.username.as_deref())
    }

    /// Role if set and non-empty.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        non_empty(self.role.as_deref())
    }

    /// Avatar URL if set and non-empty.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        non_empty(self.avatar_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Kind of auth transition being announced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// Notification emitted on every auth transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    /// The session's user after the transition; `None` once signed out.
    pub user: Option<SessionUser>,
}

impl SessionEvent {
    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self { kind: SessionEventKind::SignedIn, user: Some(user) }
    }

    #[must_use]
    pub fn token_refreshed(user: SessionUser) -> Self {
        Self { kind: SessionEventKind::TokenRefreshed, user: Some(user) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { kind: SessionEventKind::SignedOut, user: None }
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.user.is_some()
    }
}
