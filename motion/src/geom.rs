#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport space (CSS pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner of a square of side `size` centred on this point.
    #[must_use]
    pub fn top_left_for(self, size: f64) -> Self {
        let half = size / 2.0;
        Self { x: self.x - half, y: self.y - half }
    }

    /// Centre of a square of side `size` whose top-left corner is this point.
    #[must_use]
    pub fn center_for(self, size: f64) -> Self {
        let half = size / 2.0;
        Self { x: self.x + half, y: self.y + half }
    }
}
