//! Pointer tracking, device classification and easing for portfolio effects.
//!
//! This crate holds everything behind the cursor follower and the timeline
//! reveal that does not need a browser. The `portfolio` crate owns the DOM:
//! it probes capabilities, wires listeners into a [`signal::PointerSource`],
//! and drives [`engine::FollowerCore::tick`] from `requestAnimationFrame`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Touch / coarse-pointer device classification |
//! | [`signal`] | Pointer signal sources and disposable subscriptions |
//! | [`engine`] | Follower state machine and mount lifecycle |
//! | [`easing`] | Spring and tween interpolation behind the [`easing::Easing`] trait |
//! | [`clock`] | Animation-frame timestamp to delta conversion |
//! | [`config`] | Serde-backed tuning for the follower and the timeline reveal |
//! | [`reveal`] | Reveal-once entrance animation for timeline items |
//! | [`timeline`] | Timeline entry model and per-index layout |
//! | [`geom`] | Viewport points |
//! | [`consts`] | Shared numeric constants (element sizes, spring defaults, etc.) |

pub mod classify;
pub mod clock;
pub mod config;
pub mod consts;
pub mod easing;
pub mod engine;
pub mod geom;
pub mod reveal;
pub mod signal;
pub mod timeline;
