//! UI components.

pub mod mouse_follower;
pub mod timeline;
