//! Interpolation strategies that ease a rendered value toward a target.
//!
//! A [`Transition`] is either a damped [`Spring`] or a fixed-duration
//! [`Tween`]. Both implement [`Easing`], which advances a [`Motion`] by a frame
//! delta. [`AnimatedValue`] pairs a motion with its current target and handles
//! retargeting when the target moves mid-flight.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DAMPING, DEFAULT_FADE_MS, DEFAULT_MASS, DEFAULT_STIFFNESS, MAX_FRAME_DT_MS, MAX_SPRING_SUBSTEP_S, REST_DELTA,
    REST_SPEED,
};

/// Mutable integration state of one animated channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Value currently rendered.
    pub value: f64,
    /// Units per second. Only springs use it.
    pub velocity: f64,
    /// Where the current tween started.
    pub from: f64,
    /// Time spent in the current tween.
    pub elapsed_ms: f64,
}

impl Motion {
    #[must_use]
    pub fn at(value: f64) -> Self {
        Self { value, velocity: 0.0, from: value, elapsed_ms: 0.0 }
    }
}

/// A strategy for moving a [`Motion`] toward a target over time.
pub trait Easing {
    /// Advance `motion` by `dt_ms` toward `target`. Returns `true` once the
    /// motion rests exactly on the target.
    fn step(&self, motion: &mut Motion, target: f64, dt_ms: f64) -> bool;

    /// Called when the target changes before the motion settled.
    fn retarget(&self, _motion: &mut Motion) {}
}

/// Damped harmonic spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            rest_delta: REST_DELTA,
            rest_speed: REST_SPEED,
        }
    }
}

impl Spring {
    #[must_use]
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self { stiffness, damping, mass, ..Self::default() }
    }

    fn at_rest(&self, motion: &Motion, target: f64) -> bool {
        (motion.value - target).abs() <= self.rest_delta && motion.velocity.abs() <= self.rest_speed
    }
}

impl Easing for Spring {
    fn step(&self, motion: &mut Motion, target: f64, dt_ms: f64) -> bool {
        if self.mass <= 0.0 || self.stiffness <= 0.0 {
            motion.value = target;
            motion.velocity = 0.0;
            return true;
        }

        // Semi-implicit Euler, substepped for stability at stiff settings.
        let mut remaining = integrable_dt_ms(dt_ms) / 1000.0;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SPRING_SUBSTEP_S);
            let force = -self.stiffness * (motion.value - target) - self.damping * motion.velocity;
            motion.velocity += force / self.mass * h;
            motion.value += motion.velocity * h;
            remaining -= h;
        }

        if self.at_rest(motion, target) {
            motion.value = target;
            motion.velocity = 0.0;
            return true;
        }
        false
    }
}

/// Frame delta a spring will integrate: non-finite counts as no time, and a
/// single step never covers more than one clamped frame.
fn integrable_dt_ms(dt_ms: f64) -> f64 {
    if dt_ms.is_finite() { dt_ms.clamp(0.0, MAX_FRAME_DT_MS) } else { 0.0 }
}

/// Shape of a tween's progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Fixed-duration interpolation from the value at the last retarget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tween {
    pub duration_ms: f64,
    pub curve: Curve,
}

impl Default for Tween {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_FADE_MS, curve: Curve::EaseOut }
    }
}

impl Tween {
    #[must_use]
    pub fn new(duration_ms: f64, curve: Curve) -> Self {
        Self { duration_ms, curve }
    }
}

impl Easing for Tween {
    fn step(&self, motion: &mut Motion, target: f64, dt_ms: f64) -> bool {
        motion.velocity = 0.0;
        motion.elapsed_ms += dt_ms.max(0.0);
        if self.duration_ms <= 0.0 || motion.elapsed_ms >= self.duration_ms {
            motion.value = target;
            return true;
        }
        let progress = self.curve.apply(motion.elapsed_ms / self.duration_ms);
        motion.value = motion.from + (target - motion.from) * progress;
        false
    }

    fn retarget(&self, motion: &mut Motion) {
        motion.from = motion.value;
        motion.elapsed_ms = 0.0;
    }
}

/// Serializable choice of easing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transition {
    Spring(Spring),
    Tween(Tween),
}

impl Default for Transition {
    fn default() -> Self {
        Self::Spring(Spring::default())
    }
}

impl Easing for Transition {
    fn step(&self, motion: &mut Motion, target: f64, dt_ms: f64) -> bool {
        match self {
            Self::Spring(spring) => spring.step(motion, target, dt_ms),
            Self::Tween(tween) => tween.step(motion, target, dt_ms),
        }
    }

    fn retarget(&self, motion: &mut Motion) {
        match self {
            Self::Spring(spring) => spring.retarget(motion),
            Self::Tween(tween) => tween.retarget(motion),
        }
    }
}

/// One eased channel: rendered value, target, and how to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    motion: Motion,
    target: f64,
    transition: Transition,
    settled: bool,
}

impl AnimatedValue {
    /// A channel resting at `value`.
    #[must_use]
    pub fn new(value: f64, transition: Transition) -> Self {
        Self { motion: Motion::at(value), target: value, transition, settled: true }
    }

    /// Rendered value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.motion.value
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Point the channel at a new target. The rendered value does not move
    /// until the next [`AnimatedValue::advance`].
    #[allow(clippy::float_cmp)]
    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.transition.retarget(&mut self.motion);
        self.settled = false;
    }

    /// Advance the rendered value by `dt_ms`. Returns `true` when settled.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.settled {
            self.settled = self.transition.step(&mut self.motion, self.target, dt_ms);
        }
        self.settled
    }

    /// Snap to the target with no interpolation.
    pub fn jump_to_target(&mut self) {
        self.motion = Motion::at(self.target);
        self.settled = true;
    }
}
