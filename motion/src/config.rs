//! Tuning for the follower elements and the timeline reveal.
//!
//! Every struct deserializes with `#[serde(default)]`, so an override only has
//! to name the fields it changes. Defaults reproduce the portfolio's look: a
//! 32 px ring on a soft spring with an inverting blend, and an 8 px dot on the
//! stock positional spring with a short opacity fade.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CARD_OFFSET_PX, CARD_REVEAL_MS, DOT_SIZE_PX, MARKER_REVEAL_MS, RING_DAMPING, RING_MASS, RING_SIZE_PX,
    RING_STIFFNESS,
};
use crate::easing::{Curve, Spring, Transition, Tween};

/// CSS compositing mode for a follower element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    /// Inverts against whatever is underneath.
    Difference,
}

impl BlendMode {
    /// Value for the `mix-blend-mode` CSS property.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Difference => "difference",
        }
    }
}

/// One follower element: its size and how it chases its targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementConfig {
    /// Diameter in CSS pixels. The pointer sits at the element's centre.
    pub size_px: f64,
    /// Easing for both axes of the position.
    pub position: Transition,
    /// Easing for the fade in and out.
    pub opacity: Transition,
    pub blend: BlendMode,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self::dot()
    }
}

impl ElementConfig {
    /// The large ring: one soft spring for everything, inverting blend.
    #[must_use]
    pub fn ring() -> Self {
        let spring = Transition::Spring(Spring::new(RING_STIFFNESS, RING_DAMPING, RING_MASS));
        Self { size_px: RING_SIZE_PX, position: spring, opacity: spring, blend: BlendMode::Difference }
    }

    /// The small dot: stock positional spring, short fade.
    #[must_use]
    pub fn dot() -> Self {
        Self {
            size_px: DOT_SIZE_PX,
            position: Transition::Spring(Spring::default()),
            opacity: Transition::Tween(Tween::default()),
            blend: BlendMode::Normal,
        }
    }
}

/// Configuration of the cursor follower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    pub ring: ElementConfig,
    pub dot: ElementConfig,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self { ring: ElementConfig::ring(), dot: ElementConfig::dot() }
    }
}

impl FollowerConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// Objects merge key by key, so `{"ring": {"size_px": 48}}` keeps the
    /// ring's spring and blend mode. Any other value replaces wholesale.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let patch: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, patch);
        serde_json::from_value(merged)
    }
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Configuration of the timeline's reveal-on-scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fade and slide of each card.
    pub card: Transition,
    /// Pop-in of each centre marker.
    pub marker: Transition,
    /// How far a card slides in from, in CSS pixels.
    pub card_offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            card: Transition::Tween(Tween::new(CARD_REVEAL_MS, Curve::EaseOut)),
            marker: Transition::Tween(Tween::new(MARKER_REVEAL_MS, Curve::EaseOut)),
            card_offset_px: CARD_OFFSET_PX,
        }
    }
}
