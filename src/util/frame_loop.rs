//! `requestAnimationFrame` scheduling for animated components.
//!
//! A [`FrameLoop`] owns one step closure and keeps at most one frame queued.
//! Each frame hands the step the rAF timestamp; the step answers whether it
//! needs another frame. Input handlers call [`FrameLoop::request`] freely, and
//! repeated requests before the frame fires collapse into one.

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::logging::warn;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
type Step = Box<dyn FnMut(f64) -> bool>;

#[cfg(feature = "hydrate")]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

#[cfg(feature = "hydrate")]
struct Inner {
    step: RefCell<Step>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(feature = "hydrate")]
impl FrameLoop {
    /// `step(now_ms)` runs once per frame and returns `true` to keep going.
    pub fn new(step: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            step: RefCell::new(Box::new(step)),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The closure only holds a weak handle so dropping the loop frees it.
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            let again = {
                let mut step = inner.step.borrow_mut();
                (*step)(now_ms)
            };
            if again {
                inner.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    /// Queue a frame unless one is already pending.
    pub fn request(&self) {
        self.inner.schedule();
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Drop the queued frame, if any.
    pub fn cancel(&self) {
        let Some(id) = self.inner.pending.take() else {
            return;
        };
        if let Some(window) = web_sys::window()
            && let Err(err) = window.cancel_animation_frame(id)
        {
            warn!("frame loop: cancel failed: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
impl Inner {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => warn!("frame loop: request failed: {err:?}"),
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
