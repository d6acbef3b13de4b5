#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::easing::{AnimatedValue, Transition};
use crate::timeline::Side;

/// Rendered entrance state of one timeline element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    /// Horizontal offset in CSS pixels.
    pub offset_x: f64,
    pub scale: f64,
    pub settled: bool,
}

impl RevealFrame {
    /// Inline `style` value for the element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateX({:.2}px) scale({:.3});",
            self.opacity, self.offset_x, self.scale
        )
    }
}

/// Reveal-once entrance animation.
///
/// Starts in its hidden pose. The first time the element is reported in view
/// every channel heads to its resting pose; later visibility reports are
/// ignored, so scrolling away never hides it again.
#[derive(Debug, Clone, Copy)]
pub struct RevealTrack {
    revealed: bool,
    opacity: AnimatedValue,
    offset_x: AnimatedValue,
    scale: AnimatedValue,
}

impl RevealTrack {
    /// A card that fades in while sliding from its own side.
    #[must_use]
    pub fn card(index: usize, config: &RevealConfig) -> Self {
        let offset = Side::for_index(index).offset_sign() * config.card_offset_px;
        Self::hidden(config.card, 0.0, offset, 1.0)
    }

    /// A centre marker that pops in from nothing.
    #[must_use]
    pub fn marker(config: &RevealConfig) -> Self {
        Self::hidden(config.marker, 1.0, 0.0, 0.0)
    }

    fn hidden(transition: Transition, opacity: f64, offset_x: f64, scale: f64) -> Self {
        Self {
            revealed: false,
            opacity: AnimatedValue::new(opacity, transition),
            offset_x: AnimatedValue::new(offset_x, transition),
            scale: AnimatedValue::new(scale, transition),
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Report whether the element intersects the viewport. Returns `true`
    /// only on the report that triggers the reveal.
    pub fn on_visibility(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        self.opacity.set_target(1.0);
        self.offset_x.set_target(0.0);
        self.scale.set_target(1.0);
        true
    }

    /// Advance the entrance by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f64) -> RevealFrame {
        self.opacity.advance(dt_ms);
        self.offset_x.advance(dt_ms);
        self.scale.advance(dt_ms);
        self.frame()
    }

    /// The pose currently on screen.
    #[must_use]
    pub fn frame(&self) -> RevealFrame {
        RevealFrame {
            opacity: self.opacity.value(),
            offset_x: self.offset_x.value(),
            scale: self.scale.value(),
            settled: self.opacity.is_settled() && self.offset_x.is_settled() && self.scale.is_settled(),
        }
    }
}
