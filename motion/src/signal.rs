//! Pointer signal sources and disposable subscriptions.
//!
//! DESIGN
//! ======
//! Listener attach/detach is modelled as scoped acquisition: every subscribe
//! call hands back a [`Subscription`] whose release runs exactly once, either
//! explicitly or on drop. The browser binds DOM listeners behind
//! [`PointerSource`]; [`SignalHub`] is an in-memory source that lets tests
//! drive a mount without a DOM.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::geom::Point;

/// Handler for pointer-movement signals.
pub type MoveHandler = Box<dyn FnMut(Point)>;

/// Handler for pointer-left-region signals.
pub type LeaveHandler = Box<dyn FnMut()>;

/// Disposer for one attached listener. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release (the attach itself failed).
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Whether releasing this subscription would detach anything.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    /// Detach now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.is_attached()).finish()
    }
}

/// Something that delivers pointer-movement and pointer-leave signals.
pub trait PointerSource {
    fn subscribe_move(&self, handler: MoveHandler) -> Subscription;
    fn subscribe_leave(&self, handler: LeaveHandler) -> Subscription;
}

type Shared<T> = Rc<RefCell<T>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    moves: Vec<(u64, Shared<MoveHandler>)>,
    leaves: Vec<(u64, Shared<LeaveHandler>)>,
}

impl Registry {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory [`PointerSource`]. Signals are delivered synchronously, in
/// subscription order, to every listener attached at dispatch time.
#[derive(Clone, Default)]
pub struct SignalHub {
    registry: Shared<Registry>,
}

impl SignalHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a movement signal. Returns how many listeners ran.
    pub fn dispatch_move(&self, point: Point) -> usize {
        let handlers: Vec<_> = self.registry.borrow().moves.clone();
        let mut invoked = 0;
        for (id, handler) in handlers {
            // A listener released by an earlier handler must not fire.
            if !self.registry.borrow().moves.iter().any(|(live, _)| *live == id) {
                continue;
            }
            (handler.borrow_mut())(point);
            invoked += 1;
        }
        invoked
    }

    /// Deliver a leave signal. Returns how many listeners ran.
    pub fn dispatch_leave(&self) -> usize {
        let handlers: Vec<_> = self.registry.borrow().leaves.clone();
        let mut invoked = 0;
        for (id, handler) in handlers {
            if !self.registry.borrow().leaves.iter().any(|(live, _)| *live == id) {
                continue;
            }
            (handler.borrow_mut())();
            invoked += 1;
        }
        invoked
    }

    /// Number of attached movement and leave listeners.
    #[must_use]
    pub fn listener_counts(&self) -> (usize, usize) {
        let registry = self.registry.borrow();
        (registry.moves.len(), registry.leaves.len())
    }

    fn weak(&self) -> Weak<RefCell<Registry>> {
        Rc::downgrade(&self.registry)
    }
}

impl PointerSource for SignalHub {
    fn subscribe_move(&self, handler: MoveHandler) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.allocate();
            registry.moves.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        let registry = self.weak();
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().moves.retain(|(live, _)| *live != id);
            }
        })
    }

    fn subscribe_leave(&self, handler: LeaveHandler) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.allocate();
            registry.leaves.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        let registry = self.weak();
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().leaves.retain(|(live, _)| *live != id);
            }
        })
    }
}
