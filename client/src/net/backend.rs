//! Seams between the UI and the hosted backend.
//!
//! ARCHITECTURE
//! ============
//! Components and the identity view-model depend on these traits rather than
//! on the concrete client, so the refresh logic runs against in-memory fakes in
//! tests. Futures are `!Send`: everything runs on the browser's UI thread.

use std::rc::Rc;

use super::error::BackendError;
use super::types::{ProfileRow, SessionEvent, SessionUser};
use crate::util::subscription::Subscription;

/// Callback invoked on every session transition.
pub type SessionListener = Rc<dyn Fn(&SessionEvent)>;

/// The auth service: current identity, sign-out and change notifications.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// The currently signed-in account, or `None` without a session.
    async fn current_user(&self) -> Result<Option<SessionUser>, BackendError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Register `listener` for sign-in/sign-out transitions.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;
}

/// The `profiles` table: display attributes keyed by account id.
#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    /// Single-row lookup by exact id; `None` when no row exists.
    async fn profile(&self, user_id: &str) -> Result<Option<ProfileRow>, BackendError>;
}
