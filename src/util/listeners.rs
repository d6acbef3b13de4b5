//! DOM event listeners as RAII [`Subscription`]s.
//!
//! [`DomPointerSource`] feeds the follower: `mousemove` on the window gives
//! the pointer position, and `mouseleave` on `<body>` says it left the page.

#[cfg(feature = "hydrate")]
use leptos::logging::warn;
#[cfg(feature = "hydrate")]
use motion::geom::Point;
#[cfg(feature = "hydrate")]
use motion::signal::{LeaveHandler, MoveHandler, PointerSource, Subscription};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Attach `callback` for `event` on `target`. Releasing (or dropping) the
/// returned subscription removes the listener and frees the closure.
#[cfg(feature = "hydrate")]
pub fn listen(
    target: &web_sys::EventTarget,
    event: &'static str,
    callback: impl FnMut(web_sys::Event) + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        warn!("listeners: failed to attach {event}: {err:?}");
        return Subscription::detached();
    }

    let target = target.clone();
    Subscription::new(move || {
        if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            warn!("listeners: failed to detach {event}: {err:?}");
        }
    })
}

/// Viewport coordinates of a mouse event.
#[cfg(feature = "hydrate")]
pub fn pointer_position(event: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Pointer signals from the live document.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPointerSource;

#[cfg(feature = "hydrate")]
impl PointerSource for DomPointerSource {
    fn subscribe_move(&self, mut handler: MoveHandler) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        listen(&window, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                handler(pointer_position(mouse));
            }
        })
    }

    fn subscribe_leave(&self, mut handler: LeaveHandler) -> Subscription {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return Subscription::detached();
        };
        listen(&body, "mouseleave", move |_| handler())
    }
}
