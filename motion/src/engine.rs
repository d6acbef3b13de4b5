use std::cell::RefCell;
use std::rc::Rc;

use crate::classify::Environment;
use crate::config::{BlendMode, ElementConfig, FollowerConfig};
use crate::easing::AnimatedValue;
use crate::geom::Point;
use crate::signal::{PointerSource, Subscription};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Lifecycle phase of one mounted follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, classification not yet run. Renders nothing.
    #[default]
    Classifying,
    /// Touch or coarse-pointer device. Renders nothing until unmount.
    TouchSuppressed,
    /// Tracking; the pointer is outside the page (or has not moved yet).
    Hidden,
    /// Tracking; the pointer is over the page.
    Visible,
    /// Torn down. Ignores every signal.
    Unmounted,
}

impl Phase {
    /// Whether pointer signals are tracked in this phase.
    #[must_use]
    pub fn is_tracking(self) -> bool {
        matches!(self, Self::Hidden | Self::Visible)
    }
}

/// Actions returned from signal handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Targets changed; schedule a frame.
    RequestFrame,
    /// The visibility flag flipped.
    VisibilityChanged(bool),
}

/// Rendered state of one follower element for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    /// Top-left corner in viewport pixels.
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub size: f64,
    pub blend: BlendMode,
}

impl ElementFrame {
    /// Value for the element's CSS `transform`.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }

    /// Centre of the element, i.e. the pointer position it is chasing.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y).center_for(self.size)
    }
}

/// Both follower elements for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Large ring with the inverting blend.
    pub ring: ElementFrame,
    /// Small dot.
    pub dot: ElementFrame,
    /// Every channel rests on its target; no further frames are needed.
    pub settled: bool,
}

/// One follower element: three eased channels chasing the tracked pointer.
#[derive(Debug, Clone, Copy)]
struct FollowerElement {
    config: ElementConfig,
    x: AnimatedValue,
    y: AnimatedValue,
    opacity: AnimatedValue,
}

impl FollowerElement {
    fn new(config: ElementConfig, center: Point) -> Self {
        let corner = center.top_left_for(config.size_px);
        Self {
            config,
            x: AnimatedValue::new(corner.x, config.position),
            y: AnimatedValue::new(corner.y, config.position),
            opacity: AnimatedValue::new(0.0, config.opacity),
        }
    }

    fn retarget(&mut self, center: Point, visible: bool) {
        let corner = center.top_left_for(self.config.size_px);
        self.x.set_target(corner.x);
        self.y.set_target(corner.y);
        self.opacity.set_target(if visible { 1.0 } else { 0.0 });
    }

    fn advance(&mut self, dt_ms: f64) {
        self.x.advance(dt_ms);
        self.y.advance(dt_ms);
        self.opacity.advance(dt_ms);
    }

    fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.opacity.is_settled()
    }

    fn frame(&self) -> ElementFrame {
        ElementFrame {
            x: self.x.value(),
            y: self.y.value(),
            opacity: self.opacity.value(),
            size: self.config.size_px,
            blend: self.config.blend,
        }
    }

    fn target_center(&self) -> Point {
        Point::new(self.x.target(), self.y.target()).center_for(self.config.size_px)
    }

    fn target_opacity(&self) -> f64 {
        self.opacity.target()
    }
}

/// Latest pointer sample plus the visibility flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pub sample: Point,
    pub visible: bool,
}

/// Follower state for one mounted instance. Owns no browser resources.
#[derive(Debug, Clone)]
pub struct FollowerCore {
    phase: Phase,
    tracker: PointerTracker,
    ring: FollowerElement,
    dot: FollowerElement,
}

impl Default for FollowerCore {
    fn default() -> Self {
        Self::new(FollowerConfig::default())
    }
}

impl FollowerCore {
    /// A freshly mounted, not yet classified follower.
    #[must_use]
    pub fn new(config: FollowerConfig) -> Self {
        let tracker = PointerTracker::default();
        Self {
            phase: Phase::Classifying,
            tracker,
            ring: FollowerElement::new(config.ring, tracker.sample),
            dot: FollowerElement::new(config.dot, tracker.sample),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn tracker(&self) -> PointerTracker {
        self.tracker
    }

    /// Decide once whether this mount tracks the pointer. Later calls keep the
    /// first verdict.
    pub fn classify(&mut self, environment: &Environment) -> Phase {
        if self.phase != Phase::Classifying {
            return self.phase;
        }
        self.phase = if environment.is_touch_device() { Phase::TouchSuppressed } else { Phase::Hidden };
        log::debug!("follower classified {environment:?} -> {:?}", self.phase);
        self.phase
    }

    // --- Signals ---

    /// Pointer moved to `point`: replace the sample and show the follower.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        if !self.phase.is_tracking() {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(2);
        if self.phase == Phase::Hidden {
            self.phase = Phase::Visible;
            actions.push(Action::VisibilityChanged(true));
        }
        self.tracker = PointerTracker { sample: point, visible: true };
        self.retarget();
        actions.push(Action::RequestFrame);
        actions
    }

    /// Pointer left the page: hide, keeping the last position so the fade-out
    /// happens in place.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if !self.phase.is_tracking() {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(2);
        if self.phase == Phase::Visible {
            self.phase = Phase::Hidden;
            actions.push(Action::VisibilityChanged(false));
        }
        self.tracker.visible = false;
        self.retarget();
        actions.push(Action::RequestFrame);
        actions
    }

    /// Stop tracking for good.
    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
    }

    fn retarget(&mut self) {
        let PointerTracker { sample, visible } = self.tracker;
        self.ring.retarget(sample, visible);
        self.dot.retarget(sample, visible);
    }

    // --- Rendering ---

    /// Advance every channel by `dt_ms` and return the frame to paint, or
    /// `None` when nothing should be on screen.
    pub fn tick(&mut self, dt_ms: f64) -> Option<FrameSnapshot> {
        if !self.phase.is_tracking() {
            return None;
        }
        self.ring.advance(dt_ms);
        self.dot.advance(dt_ms);
        self.snapshot()
    }

    /// The frame currently on screen, without advancing.
    #[must_use]
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        if !self.phase.is_tracking() {
            return None;
        }
        Some(FrameSnapshot {
            ring: self.ring.frame(),
            dot: self.dot.frame(),
            settled: self.ring.is_settled() && self.dot.is_settled(),
        })
    }

    // --- Queries ---

    /// Where the ring's centre is heading.
    #[must_use]
    pub fn ring_target_center(&self) -> Point {
        self.ring.target_center()
    }

    /// Where the dot's centre is heading.
    #[must_use]
    pub fn dot_target_center(&self) -> Point {
        self.dot.target_center()
    }

    /// Opacity both elements are heading to.
    #[must_use]
    pub fn target_opacity(&self) -> f64 {
        self.ring.target_opacity()
    }
}

/// A follower attached to a pointer source.
///
/// Mounting classifies the environment and, on non-touch devices only,
/// subscribes to movement and leave signals. Dropping the mount (or calling
/// [`FollowerMount::unmount`]) detaches both before returning.
pub struct FollowerMount {
    core: Rc<RefCell<FollowerCore>>,
    subscriptions: Vec<Subscription>,
}

impl FollowerMount {
    /// Classify and, unless suppressed, subscribe. `notify` runs synchronously
    /// after every mutation that needs a redraw.
    pub fn mount(
        core: Rc<RefCell<FollowerCore>>,
        environment: &Environment,
        source: &dyn PointerSource,
        notify: Rc<dyn Fn()>,
    ) -> Self {
        let phase = core.borrow_mut().classify(environment);
        if !phase.is_tracking() {
            return Self { core, subscriptions: Vec::new() };
        }

        let on_move = {
            let core = Rc::clone(&core);
            let notify = Rc::clone(&notify);
            source.subscribe_move(Box::new(move |point| {
                let actions = core.borrow_mut().on_pointer_move(point);
                dispatch(&actions, notify.as_ref());
            }))
        };
        let on_leave = {
            let core = Rc::clone(&core);
            source.subscribe_leave(Box::new(move || {
                let actions = core.borrow_mut().on_pointer_leave();
                dispatch(&actions, notify.as_ref());
            }))
        };

        Self { core, subscriptions: vec![on_move, on_leave] }
    }

    #[must_use]
    pub fn core(&self) -> &Rc<RefCell<FollowerCore>> {
        &self.core
    }

    /// Whether the mount is tracking the pointer (i.e. not touch-suppressed).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Detach both listeners and mark the core unmounted.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for FollowerMount {
    fn drop(&mut self) {
        self.subscriptions.clear();
        match self.core.try_borrow_mut() {
            Ok(mut core) => core.unmount(),
            Err(_) => log::debug!("follower mount dropped while core borrowed; phase left as is"),
        }
    }
}

fn dispatch(actions: &[Action], notify: &dyn Fn()) {
    for action in actions {
        match action {
            Action::RequestFrame => notify(),
            Action::VisibilityChanged(visible) => log::trace!("follower visibility -> {visible}"),
        }
    }
}
