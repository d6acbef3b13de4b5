#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::consts::{MAX_FRAME_DT_MS, NOMINAL_FRAME_MS};

/// Turns `requestAnimationFrame` timestamps into per-frame deltas.
///
/// The first frame after a (re)start has no predecessor, so it advances by one
/// nominal 60 Hz frame. Long gaps are clamped so a backgrounded tab does not
/// fast-forward every animation on return.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now_ms` and return the delta since the previous one.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_DT_MS),
            None => NOMINAL_FRAME_MS,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp; call when the frame loop goes idle.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
