//! Cursor follower: a large inverting ring and a small dot that chase the
//! pointer on devices with a real mouse.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in `motion::engine::FollowerCore`; this component only
//! wires it to the browser. On mount the environment is classified once. Touch
//! devices (and server rendering) get nothing at all: no elements, no
//! listeners, no frames. Otherwise pointer events feed the core, the core asks
//! for frames, and each frame paints `transform`/`opacity` straight onto the
//! two elements without going through reactive signals.

#[cfg(test)]
#[path = "mouse_follower_test.rs"]
mod mouse_follower_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use motion::config::{ElementConfig, FollowerConfig};
use motion::engine::ElementFrame;
use motion::geom::Point;

#[cfg(feature = "hydrate")]
use crate::util::capabilities::detect_environment;
#[cfg(feature = "hydrate")]
use crate::util::frame_loop::FrameLoop;
#[cfg(feature = "hydrate")]
use crate::util::listeners::DomPointerSource;
#[cfg(feature = "hydrate")]
use motion::clock::FrameClock;
#[cfg(feature = "hydrate")]
use motion::engine::{FollowerCore, FollowerMount};

/// Stacking order above all page content.
const FOLLOWER_Z_INDEX: u32 = 50;

/// Cursor follower overlay. Renders nothing on touch devices.
#[component]
pub fn MouseFollower(#[prop(optional)] config: Option<FollowerConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let active = RwSignal::new(false);
    let ring_ref = NodeRef::<leptos::html::Div>::new();
    let dot_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let session = StoredValue::new_local(None::<FollowerSession>);
        Effect::new(move || {
            if session.with_value(Option::is_some) {
                return;
            }
            let started = FollowerSession::start(config, ring_ref, dot_ref);
            active.set(started.is_active());
            session.set_value(Some(started));
        });
        on_cleanup(move || {
            session.update_value(|slot| {
                slot.take();
            });
        });
    }

    let ring = config.ring;
    let dot = config.dot;
    view! {
        <Show when=move || active.get()>
            <div
                class="mouse-follower mouse-follower--ring"
                aria-hidden="true"
                node_ref=ring_ref
                style=element_style(&ring)
            >
                <div class="mouse-follower__fill"></div>
            </div>
            <div
                class="mouse-follower mouse-follower--dot"
                aria-hidden="true"
                node_ref=dot_ref
                style=element_style(&dot)
            ></div>
        </Show>
    }
}

/// Inline style an element is created with: fixed to the viewport, ignoring
/// the pointer, parked invisible over the top-left corner until the first
/// move arrives.
pub fn element_style(element: &ElementConfig) -> String {
    let corner = Point::ORIGIN.top_left_for(element.size_px);
    let parked = ElementFrame { x: corner.x, y: corner.y, opacity: 0.0, size: element.size_px, blend: element.blend };
    format!(
        "position: fixed; top: 0; left: 0; width: {size}px; height: {size}px; border-radius: 9999px; \
         pointer-events: none; z-index: {FOLLOWER_Z_INDEX}; mix-blend-mode: {blend}; opacity: 0; transform: {transform};",
        size = element.size_px,
        blend = element.blend.css(),
        transform = parked.transform(),
    )
}

/// Live follower wiring for one mount. Dropping it detaches the listeners
/// and cancels any queued frame.
#[cfg(feature = "hydrate")]
struct FollowerSession {
    mount: FollowerMount,
    frames: Rc<FrameLoop>,
}

#[cfg(feature = "hydrate")]
impl FollowerSession {
    fn start(
        config: FollowerConfig,
        ring_ref: NodeRef<leptos::html::Div>,
        dot_ref: NodeRef<leptos::html::Div>,
    ) -> Self {
        let core = Rc::new(RefCell::new(FollowerCore::new(config)));

        let frames = Rc::new({
            let core = Rc::clone(&core);
            let mut clock = FrameClock::new();
            FrameLoop::new(move |now_ms| {
                let dt_ms = clock.advance(now_ms);
                let Some(frame) = core.borrow_mut().tick(dt_ms) else {
                    clock.reset();
                    return false;
                };
                paint(ring_ref, &frame.ring);
                paint(dot_ref, &frame.dot);
                if frame.settled {
                    // Next burst starts from a nominal frame, not the idle gap.
                    clock.reset();
                }
                !frame.settled
            })
        });

        let notify: Rc<dyn Fn()> = {
            let frames = Rc::clone(&frames);
            Rc::new(move || frames.request())
        };
        let environment = detect_environment();
        let mount = FollowerMount::mount(core, &environment, &DomPointerSource, notify);
        if mount.is_active() {
            log::debug!("mouse follower: tracking pointer");
        } else {
            log::debug!("mouse follower: suppressed ({environment:?})");
        }

        Self { mount, frames }
    }

    fn is_active(&self) -> bool {
        self.mount.is_active()
    }
}

#[cfg(feature = "hydrate")]
impl Drop for FollowerSession {
    fn drop(&mut self) {
        self.frames.cancel();
    }
}

#[cfg(feature = "hydrate")]
fn paint(target: NodeRef<leptos::html::Div>, frame: &ElementFrame) {
    let Some(element) = target.get_untracked() else {
        return;
    };
    let style = element.style();
    if let Err(err) = style.set_property("transform", &frame.transform()) {
        leptos::logging::warn!("mouse follower: transform rejected: {err:?}");
    }
    if let Err(err) = style.set_property("opacity", &format!("{:.3}", frame.opacity)) {
        leptos::logging::warn!("mouse follower: opacity rejected: {err:?}");
    }
}
