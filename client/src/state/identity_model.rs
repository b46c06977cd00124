//! Identity view-model: keeps a published [`Identity`] in step with the session.
//!
//! ARCHITECTURE
//! ============
//! On mount the model runs one refresh and subscribes to session changes. A
//! notification with a session triggers another refresh; a notification
//! without one publishes the guest sentinel on the spot, with no network call.
//! A refresh reads the session user, fetches the profile row and publishes
//! the merge.
//!
//! CONCURRENCY
//! ===========
//! Refreshes can overlap (a sign-in notification while the mount refresh is in
//! flight). Every refresh and every guest publication takes a ticket from a
//! monotonic fence; a refresh publishes only if its ticket is still the latest
//! when it completes, so a slow response never overwrites a newer identity.
//! After `release` nothing publishes, including refreshes already in flight.

#[cfg(test)]
#[path = "identity_model_test.rs"]
mod identity_model_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::identity::{Identity, ProfileDefaults, merge_profile};
use crate::net::backend::{ProfileRepository, SessionStore};
use crate::net::types::SessionEvent;
use crate::util::subscription::Subscription;

/// Look up the session user and profile row and merge them.
///
/// Never fails: a session lookup error shows the guest, a profile error falls
/// back to defaults.
pub async fn resolve_identity<S, P>(sessions: &S, profiles: &P, defaults: &ProfileDefaults) -> Identity
where
    S: SessionStore,
    P: ProfileRepository,
{
    let user = match sessions.current_user().await {
        Ok(Some(user)) => user,
        Ok(None) => return Identity::guest(),
        Err(e) => {
            log::warn!("session lookup failed, showing guest: {e}");
            return Identity::guest();
        }
    };

    let row = match profiles.profile(&user.id).await {
        Ok(row) => row,
        Err(e) => {
            log::warn!("profile fetch for {} failed, using defaults: {e}", user.id);
            None
        }
    };

    merge_profile(defaults, &user, row.as_ref())
}

/// End the session, logging failures. Returns whether sign-out succeeded.
pub async fn sign_out<S: SessionStore>(sessions: &S) -> bool {
    match sessions.sign_out().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("sign out failed: {e}");
            false
        }
    }
}

/// Monotonic ticket counter; only the most recent ticket may publish.
#[derive(Debug, Default)]
pub struct RefreshFence {
    latest: Cell<u64>,
}

impl RefreshFence {
    /// Start a new unit of work, invalidating every earlier ticket.
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Publishes the signed-in identity for one mounted component.
pub struct IdentityViewModel<S, P> {
    sessions: Rc<S>,
    profiles: Rc<P>,
    defaults: ProfileDefaults,
    publish: Box<dyn Fn(Identity)>,
    fence: RefreshFence,
    released: Cell<bool>,
    subscription: RefCell<Option<Subscription>>,
}

impl<S, P> IdentityViewModel<S, P>
where
    S: SessionStore + 'static,
    P: ProfileRepository + 'static,
{
    pub fn new<F>(sessions: Rc<S>, profiles: Rc<P>, publish: F) -> Rc<Self>
    where
        F: Fn(Identity) + 'static,
    {
        Rc::new(Self {
            sessions,
            profiles,
            defaults: ProfileDefaults::default(),
            publish: Box::new(publish),
            fence: RefreshFence::default(),
            released: Cell::new(false),
            subscription: RefCell::new(None),
        })
    }

    /// Subscribe to session changes and start the initial refresh.
    ///
    /// `spawn` runs a refresh task on the UI executor.
    pub fn mount<F>(self: &Rc<Self>, spawn: F)
    where
        F: Fn(LocalBoxFuture<'static, ()>) + 'static,
    {
        let spawn = Rc::new(spawn);

        let weak = Rc::downgrade(self);
        let spawn_on_change = Rc::clone(&spawn);
        let subscription = self.sessions.on_session_change(Rc::new(move |event: &SessionEvent| {
            let Some(model) = weak.upgrade() else {
                return;
            };
            if model.apply_session_change(event) {
                spawn_on_change(Box::pin(async move { model.refresh().await }));
            }
        }));
        if let Some(mut previous) = self.subscription.replace(Some(subscription)) {
            previous.release();
        }

        let model = Rc::clone(self);
        spawn(Box::pin(async move { model.refresh().await }));
    }

    /// React to a session transition. Returns `true` when a refresh is needed.
    pub fn apply_session_change(&self, event: &SessionEvent) -> bool {
        if self.released.get() {
            return false;
        }
        if event.has_session() {
            return true;
        }
        self.fence.begin();
        (self.publish)(Identity::guest());
        false
    }

    /// Recompute and publish the identity unless a newer refresh superseded it.
    pub async fn refresh(&self) {
        if self.released.get() {
            return;
        }
        let ticket = self.fence.begin();
        let identity = resolve_identity(&*self.sessions, &*self.profiles, &self.defaults).await;

        if self.released.get() {
            log::debug!("identity refresh #{ticket} completed after release; dropped");
            return;
        }
        if !self.fence.is_current(ticket) {
            log::debug!("discarding stale identity refresh #{ticket}");
            return;
        }
        (self.publish)(identity);
    }

    /// Stop listening and publishing. Idempotent.
    pub fn release(&self) {
        self.released.set(true);
        let subscription = self.subscription.borrow_mut().take();
        if let Some(mut subscription) = subscription {
            subscription.release();
        }
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}
