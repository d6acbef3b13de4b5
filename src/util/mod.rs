//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic.
//! Everything touching `web_sys` is gated on the `hydrate` feature; the server
//! build sees only the pure fallbacks.

pub mod capabilities;
pub mod frame_loop;
pub mod in_view;
pub mod listeners;
pub mod viewport;
