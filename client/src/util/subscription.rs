//! Scoped listener registry for push notifications (session changes).
//!
//! DESIGN
//! ======
//! Every listener is paired with a shared `active` flag. `emit` snapshots the
//! listener list before invoking anything, and re-checks the flag right before
//! each call, so a listener released mid-emit (even by an earlier listener in
//! the same emit) is never invoked afterwards. Dropping a [`Subscription`]
//! releases it.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Callback invoked with each emitted event.
pub type Listener<E> = Rc<dyn Fn(&E)>;

struct Slot<E> {
    id: u64,
    active: Rc<Cell<bool>>,
    listener: Listener<E>,
}

struct Registry<E> {
    next_id: u64,
    slots: Vec<Slot<E>>,
}

/// Single-threaded fan-out of events to subscribed listeners.
pub struct Broadcaster<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Default for Broadcaster<E> {
    fn default() -> Self {
        Self { registry: Rc::new(RefCell::new(Registry { next_id: 0, slots: Vec::new() })) }
    }
}

impl<E: 'static> Broadcaster<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the returned handle is
    /// released or dropped.
    pub fn subscribe(&self, listener: Listener<E>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.slots.push(Slot { id, active: active.clone(), listener });
            id
        };

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            active,
            detach: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().slots.retain(|slot| slot.id != id);
                }
            })),
        }
    }

    /// Deliver `event` to every active listener. Returns how many were invoked.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<(Rc<Cell<bool>>, Listener<E>)> = self
            .registry
            .borrow()
            .slots
            .iter()
            .map(|slot| (slot.active.clone(), slot.listener.clone()))
            .collect();

        let mut delivered = 0;
        for (active, listener) in snapshot {
            if active.get() {
                listener(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }
}

/// Handle to a registered listener.
///
/// After [`Subscription::release`] (or drop) the listener is never invoked again.
pub struct Subscription {
    active: Rc<Cell<bool>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unregister the listener. Idempotent.
    pub fn release(&mut self) {
        self.active.set(false);
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.active.get()).finish()
    }
}
