//! # portfolio
//!
//! Leptos + WASM components for the portfolio site's pointer and scroll
//! effects: a cursor follower that stays out of the way on touch devices, and
//! an experience timeline whose cards reveal themselves once on scroll.
//!
//! The browser-free logic (classification, easing, state machines) lives in
//! the `motion` crate. This crate bridges it to the DOM: capability probes,
//! event listeners, `requestAnimationFrame`, and `IntersectionObserver`.

pub mod components;
pub mod util;

/// Mount a [`components::mouse_follower::MouseFollower`] directly on `<body>`.
///
/// For pages that are not themselves Leptos apps; installs console logging and
/// the panic hook first.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_mouse_follower() {
    use crate::components::mouse_follower::MouseFollower;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(|| view! { <MouseFollower/> });
}
