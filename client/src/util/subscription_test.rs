use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<u32>>>, Listener<u32>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Rc::new(move |event: &u32| sink.borrow_mut().push(*event)))
}

#[test]
fn emit_reaches_every_subscriber() {
    let events = Broadcaster::new();
    let (a_seen, a) = recorder();
    let (b_seen, b) = recorder();
    let _a = events.subscribe(a);
    let _b = events.subscribe(b);

    assert_eq!(events.emit(&7), 2);
    assert_eq!(*a_seen.borrow(), vec![7]);
    assert_eq!(*b_seen.borrow(), vec![7]);
}

#[test]
fn released_subscription_is_not_invoked() {
    let events = Broadcaster::new();
    let (seen, listener) = recorder();
    let mut sub = events.subscribe(listener);

    events.emit(&1);
    sub.release();
    events.emit(&2);

    assert_eq!(*seen.borrow(), vec![1]);
    assert!(!sub.is_active());
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn release_is_idempotent() {
    let events: Broadcaster<u32> = Broadcaster::new();
    let (_seen, listener) = recorder();
    let mut sub = events.subscribe(listener);
    sub.release();
    sub.release();
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn dropping_subscription_releases_it() {
    let events = Broadcaster::new();
    let (seen, listener) = recorder();
    {
        let _sub = events.subscribe(listener);
        assert_eq!(events.listener_count(), 1);
    }
    assert_eq!(events.emit(&3), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn listener_released_during_emit_is_skipped() {
    let events = Broadcaster::new();
    let (second_seen, second) = recorder();
    let second_sub = Rc::new(RefCell::new(None::<Subscription>));

    let handle = second_sub.clone();
    let _first = events.subscribe(Rc::new(move |_: &u32| {
        if let Some(mut sub) = handle.borrow_mut().take() {
            sub.release();
        }
    }));
    *second_sub.borrow_mut() = Some(events.subscribe(second));

    assert_eq!(events.emit(&9), 1);
    assert!(second_seen.borrow().is_empty());
}

#[test]
fn subscription_outliving_broadcaster_releases_cleanly() {
    let events = Broadcaster::new();
    let (_seen, listener) = recorder();
    let mut sub = events.subscribe(listener);
    drop(events);
    sub.release();
    assert!(!sub.is_active());
}
