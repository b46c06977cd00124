//! Display-ready identity for the header and profile popup.
//!
//! DESIGN
//! ======
//! `Identity` is derived, never edited: it is rebuilt from the session user and
//! the profile row by [`merge_profile`], or replaced wholesale by the guest
//! sentinel. `id.is_some()` is the single source of truth for "signed in".

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::{ProfileRow, SessionUser};

/// Avatar shown whenever the profile has none.
pub const DEFAULT_AVATAR_URL: &str = "https://i.ibb.co/L89B6Pz/default-avatar.png";

/// Role shown for a signed-in user whose profile has none.
pub const FALLBACK_ROLE: &str = "Role N/A";

/// Username used when neither the profile nor the session email provides one.
pub const FALLBACK_USERNAME: &str = "User";

/// Identity as rendered by the navigation shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Account id; `Some` iff a session exists.
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: String,
    pub avatar_url: String,
}

impl Identity {
    /// The fixed placeholder published when no session exists.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            id: None,
            username: "Guest".to_owned(),
            email: String::new(),
            role: String::new(),
            avatar_url: DEFAULT_AVATAR_URL.to_owned(),
        }
    }

    /// Placeholder shown before the first refresh resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            id: None,
            username: "Guest User".to_owned(),
            email: "Loading...".to_owned(),
            role: "Loading...".to_owned(),
            avatar_url: DEFAULT_AVATAR_URL.to_owned(),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.id.is_some()
    }

    /// Avatar to render; never empty.
    #[must_use]
    pub fn avatar_src(&self) -> &str {
        if self.avatar_url.is_empty() { DEFAULT_AVATAR_URL } else { &self.avatar_url }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::loading()
    }
}

/// Values substituted for fields the profile row leaves out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub role: String,
    pub avatar_url: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self { role: FALLBACK_ROLE.to_owned(), avatar_url: DEFAULT_AVATAR_URL.to_owned() }
    }
}

/// Merge the profile row over `defaults` for a signed-in `user`.
///
/// A missing row behaves like a row with every field absent.
#[must_use]
pub fn merge_profile(defaults: &ProfileDefaults, user: &SessionUser, row: Option<&ProfileRow>) -> Identity {
    let email = user.email.clone().unwrap_or_default();
    let username = row
        .and_then(ProfileRow::username)
        .map(str::to_owned)
        .or_else(|| email_local_part(&email).map(str::to_owned))
        .unwrap_or_else(|| FALLBACK_USERNAME.to_owned());
    let role = row
        .and_then(ProfileRow::role)
        .map_or_else(|| defaults.role.clone(), str::to_owned);
    let avatar_url = row
        .and_then(ProfileRow::avatar_url)
        .map_or_else(|| defaults.avatar_url.clone(), str::to_owned);

    Identity { id: Some(user.id.clone()), username, email, role, avatar_url }
}

/// Substring before the first `@`, if non-empty.
#[must_use]
pub fn email_local_part(email: &str) -> Option<&str> {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() { None } else { Some(local) }
}
