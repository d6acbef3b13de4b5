//! Viewport-width helpers.
//!
//! Layouts switch to their stacked form below the mobile breakpoint. The
//! reactive flag starts `false` so server-rendered markup is the desktop
//! layout; the client corrects it on hydration and on every resize across the
//! breakpoint.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::listeners::listen;
#[cfg(feature = "hydrate")]
use motion::consts::MOBILE_BREAKPOINT_PX;
#[cfg(feature = "hydrate")]
use motion::signal::Subscription;

/// Media query matching viewports narrower than `breakpoint_px`.
pub fn mobile_query(breakpoint_px: u32) -> String {
    format!("(max-width: {}px)", breakpoint_px.saturating_sub(1))
}

/// Reactive "viewport is below the mobile breakpoint" flag.
pub fn use_is_mobile() -> ReadSignal<bool> {
    let is_mobile = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let listener = StoredValue::new_local(None::<Subscription>);
        Effect::new(move || {
            if listener.with_value(Option::is_some) {
                return;
            }
            let query = mobile_query(MOBILE_BREAKPOINT_PX);
            let Some(window) = web_sys::window() else {
                return;
            };
            let list = match window.match_media(&query) {
                Ok(Some(list)) => list,
                Ok(None) => return,
                Err(err) => {
                    leptos::logging::warn!("viewport: {query} rejected: {err:?}");
                    return;
                }
            };
            is_mobile.set(list.matches());
            let watched = list.clone();
            let subscription = listen(&list, "change", move |_| is_mobile.set(watched.matches()));
            listener.set_value(Some(subscription));
        });
        on_cleanup(move || {
            listener.update_value(|slot| {
                slot.take();
            });
        });
    }

    is_mobile.read_only()
}
