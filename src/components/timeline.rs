//! Experience timeline: alternating cards down a centre line, each revealed
//! once as it scrolls into view.
//!
//! Below the mobile breakpoint the line and markers disappear and cards stack
//! in a single column. Server-rendered markup carries every card in its hidden
//! pose; hydration starts the observers that bring them in.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use motion::config::RevealConfig;
use motion::reveal::RevealTrack;
use motion::timeline::{EntryLayout, TimelineEntry, container_class};

use crate::util::viewport::use_is_mobile;
#[cfg(feature = "hydrate")]
use crate::util::{frame_loop::FrameLoop, in_view::observe_once};
#[cfg(feature = "hydrate")]
use motion::clock::FrameClock;
#[cfg(feature = "hydrate")]
use motion::signal::Subscription;

/// Timeline of `entries`, in order.
#[component]
pub fn Timeline(entries: Vec<TimelineEntry>, #[prop(optional)] config: Option<RevealConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let is_mobile = use_is_mobile();

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| view! { <TimelineItem index=index entry=entry config=config is_mobile=is_mobile/> })
        .collect::<Vec<_>>();

    view! {
        <div class=move || container_class(is_mobile.get())>
            <Show when=move || !is_mobile.get()>
                <div class="timeline__line"></div>
            </Show>
            {items}
        </div>
    }
}

#[component]
fn TimelineItem(
    index: usize,
    entry: TimelineEntry,
    config: RevealConfig,
    is_mobile: ReadSignal<bool>,
) -> impl IntoView {
    let layout = move || EntryLayout::for_index(index, is_mobile.get());
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let marker_ref = NodeRef::<leptos::html::Div>::new();

    let card_track = RevealTrack::card(index, &config);
    let marker_track = RevealTrack::marker(&config);
    let card_style = RwSignal::new(card_track.frame().style());
    let marker_style = RwSignal::new(marker_track.frame().style());

    #[cfg(feature = "hydrate")]
    {
        reveal_on_enter(card_ref, card_track, card_style);
        reveal_on_enter(marker_ref, marker_track, marker_style);
    }

    let meta = entry.meta_line();
    view! {
        <div class=move || layout().row_class()>
            <div class=move || layout().card_class() node_ref=card_ref style=move || card_style.get()>
                <div class="timeline__panel">
                    <h3 class="timeline__title">{entry.title}</h3>
                    <div class="timeline__meta">{meta}</div>
                    <p class="timeline__description">{entry.description}</p>
                </div>
            </div>
            <Show when=move || layout().show_marker>
                <div class="timeline__marker-slot">
                    <div class="timeline__marker" node_ref=marker_ref style=move || marker_style.get()>
                        <div class="timeline__marker-dot"></div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Drive `track` into `style` once `target` first scrolls into view.
///
/// The marker element comes and goes with the layout, so the observer is
/// re-attached whenever the node changes until the reveal has fired.
#[cfg(feature = "hydrate")]
fn reveal_on_enter(target: NodeRef<leptos::html::Div>, track: RevealTrack, style: RwSignal<String>) {
    let track = Rc::new(RefCell::new(track));
    let frames = Rc::new({
        let track = Rc::clone(&track);
        let mut clock = FrameClock::new();
        FrameLoop::new(move |now_ms| {
            let frame = track.borrow_mut().tick(clock.advance(now_ms));
            style.set(frame.style());
            !frame.settled
        })
    });

    let observer = StoredValue::new_local(None::<Subscription>);
    let frames_handle = StoredValue::new_local(Rc::clone(&frames));

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        observer.update_value(|slot| {
            slot.take();
        });
        if track.borrow().is_revealed() {
            return;
        }
        let track = Rc::clone(&track);
        let frames = Rc::clone(&frames);
        let subscription = observe_once(&element, move || {
            if track.borrow_mut().on_visibility(true) {
                frames.request();
            }
        });
        observer.set_value(Some(subscription));
    });

    on_cleanup(move || {
        observer.update_value(|slot| {
            slot.take();
        });
        frames_handle.with_value(|frames| frames.cancel());
    });
}
