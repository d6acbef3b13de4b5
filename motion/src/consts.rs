//! Shared numeric constants for the motion crate.

// ── Elements ────────────────────────────────────────────────────

/// Diameter of the outer follower ring, in CSS pixels.
pub const RING_SIZE_PX: f64 = 32.0;

/// Diameter of the inner follower dot, in CSS pixels.
pub const DOT_SIZE_PX: f64 = 8.0;

// ── Springs ─────────────────────────────────────────────────────

/// Ring spring stiffness.
pub const RING_STIFFNESS: f64 = 300.0;

/// Ring spring damping.
pub const RING_DAMPING: f64 = 20.0;

/// Ring spring mass.
pub const RING_MASS: f64 = 0.5;

/// Stiffness of the default positional spring (used by the dot).
pub const DEFAULT_STIFFNESS: f64 = 500.0;

/// Damping of the default positional spring.
pub const DEFAULT_DAMPING: f64 = 25.0;

/// Mass of the default positional spring.
pub const DEFAULT_MASS: f64 = 1.0;

/// A spring is at rest once it is this close to its target...
pub const REST_DELTA: f64 = 0.01;

/// ...and moving slower than this (units per second).
pub const REST_SPEED: f64 = 0.05;

/// Largest integration step for springs, in seconds.
pub const MAX_SPRING_SUBSTEP_S: f64 = 0.001;

// ── Tweens ──────────────────────────────────────────────────────

/// Default duration of an opacity fade, in milliseconds.
pub const DEFAULT_FADE_MS: f64 = 300.0;

/// Duration of a timeline card entrance, in milliseconds.
pub const CARD_REVEAL_MS: f64 = 500.0;

/// Duration of a timeline marker pop-in, in milliseconds.
pub const MARKER_REVEAL_MS: f64 = 300.0;

/// Horizontal distance a timeline card slides in from, in CSS pixels.
pub const CARD_OFFSET_PX: f64 = 50.0;

// ── Frame clock ─────────────────────────────────────────────────

/// Delta assumed for the first frame after the loop (re)starts.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// Upper bound on a single frame delta (e.g. after a backgrounded tab).
pub const MAX_FRAME_DT_MS: f64 = 100.0;

// ── Capability probes ───────────────────────────────────────────

/// Media query matching a low-precision primary pointer.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Media query matching a primary input that cannot hover.
pub const NO_HOVER_QUERY: &str = "(hover: none)";

/// Event whose support marks a touch-capable environment.
pub const TOUCH_START_EVENT: &str = "touchstart";

/// Viewport width below which the timeline collapses to one column.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
