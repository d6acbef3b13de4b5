use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counting_move(counter: &Rc<Cell<usize>>) -> MoveHandler {
    let counter = Rc::clone(counter);
    Box::new(move |_| counter.set(counter.get() + 1))
}

fn counting_leave(counter: &Rc<Cell<usize>>) -> LeaveHandler {
    let counter = Rc::clone(counter);
    Box::new(move || counter.set(counter.get() + 1))
}

// =============================================================
// Subscription
// =============================================================

#[test]
fn subscription_releases_once_on_drop() {
    let released = Rc::new(Cell::new(0));
    {
        let r = Rc::clone(&released);
        let _sub = Subscription::new(move || r.set(r.get() + 1));
    }
    assert_eq!(released.get(), 1);
}

#[test]
fn explicit_release_does_not_release_twice() {
    let released = Rc::new(Cell::new(0));
    let r = Rc::clone(&released);
    let sub = Subscription::new(move || r.set(r.get() + 1));
    assert!(sub.is_attached());
    sub.release();
    assert_eq!(released.get(), 1);
}

#[test]
fn detached_subscription_is_inert() {
    let sub = Subscription::detached();
    assert!(!sub.is_attached());
    sub.release();
}

#[test]
fn subscription_debug_reports_attachment() {
    let sub = Subscription::detached();
    assert_eq!(format!("{sub:?}"), "Subscription { attached: false }");
}

// =============================================================
// SignalHub
// =============================================================

#[test]
fn move_reaches_subscriber_with_payload() {
    let hub = SignalHub::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = hub.subscribe_move(Box::new(move |p| sink.borrow_mut().push(p)));

    assert_eq!(hub.dispatch_move(Point::new(1.0, 2.0)), 1);
    assert_eq!(hub.dispatch_move(Point::new(3.0, 4.0)), 1);
    assert_eq!(*seen.borrow(), vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
}

#[test]
fn leave_reaches_subscriber() {
    let hub = SignalHub::new();
    let count = Rc::new(Cell::new(0));
    let _sub = hub.subscribe_leave(counting_leave(&count));
    assert_eq!(hub.dispatch_leave(), 1);
    assert_eq!(count.get(), 1);
}

#[test]
fn move_and_leave_are_independent_streams() {
    let hub = SignalHub::new();
    let moves = Rc::new(Cell::new(0));
    let _sub = hub.subscribe_move(counting_move(&moves));
    assert_eq!(hub.dispatch_leave(), 0);
    assert_eq!(moves.get(), 0);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let hub = SignalHub::new();
    let count = Rc::new(Cell::new(0));
    let sub = hub.subscribe_move(counting_move(&count));
    assert_eq!(hub.listener_counts(), (1, 0));

    drop(sub);
    assert_eq!(hub.listener_counts(), (0, 0));
    assert_eq!(hub.dispatch_move(Point::ORIGIN), 0);
    assert_eq!(count.get(), 0);
}

#[test]
fn releasing_one_listener_keeps_the_other() {
    let hub = SignalHub::new();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let sub_a = hub.subscribe_leave(counting_leave(&a));
    let _sub_b = hub.subscribe_leave(counting_leave(&b));

    sub_a.release();
    assert_eq!(hub.dispatch_leave(), 1);
    assert_eq!((a.get(), b.get()), (0, 1));
}

#[test]
fn listener_released_mid_dispatch_does_not_fire() {
    let hub = SignalHub::new();
    let second_hits = Rc::new(Cell::new(0));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let victim_slot = Rc::clone(&victim);
    let _killer = hub.subscribe_move(Box::new(move |_| {
        victim_slot.borrow_mut().take();
    }));
    *victim.borrow_mut() = Some(hub.subscribe_move(counting_move(&second_hits)));

    assert_eq!(hub.dispatch_move(Point::ORIGIN), 1);
    assert_eq!(second_hits.get(), 0);
}

#[test]
fn subscription_outliving_hub_releases_quietly() {
    let hub = SignalHub::new();
    let count = Rc::new(Cell::new(0));
    let sub = hub.subscribe_move(counting_move(&count));
    drop(hub);
    sub.release();
}
