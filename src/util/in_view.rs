//! One-shot "scrolled into view" notifications.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::logging::warn;
#[cfg(feature = "hydrate")]
use motion::signal::Subscription;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `on_enter` the first time `element` intersects the viewport, then stop
/// observing.
///
/// If the browser refuses to create an observer the callback runs
/// immediately, so revealed content is never stuck hidden.
#[cfg(feature = "hydrate")]
pub fn observe_once(element: &web_sys::Element, on_enter: impl FnOnce() + 'static) -> Subscription {
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(on_enter))));

    let pending_for_cb = Rc::clone(&pending);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let entered = entries
            .iter()
            .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
        if !entered {
            return;
        }
        observer.disconnect();
        let fire = pending_for_cb.borrow_mut().take();
        if let Some(fire) = fire {
            fire();
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let observer = match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("in_view: observer unavailable, revealing now: {err:?}");
            let fire = pending.borrow_mut().take();
            if let Some(fire) = fire {
                fire();
            }
            return Subscription::detached();
        }
    };
    observer.observe(element);

    Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    })
}
