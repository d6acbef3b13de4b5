//! Touch / coarse-pointer device classification.
//!
//! The verdict is deliberately permissive: any single touch-ish signal is
//! enough to suppress the follower. When there is no interactive window at all
//! (server rendering, pre-render) the environment is [`Environment::Headless`]
//! and classifies as touch so nothing is rendered.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::consts::{COARSE_POINTER_QUERY, NO_HOVER_QUERY, TOUCH_START_EVENT};

/// Error returned by a [`CapabilityProbe`] query.
///
/// Never surfaces past [`Capabilities::probe`]; a failed query counts as an
/// absent signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// `matchMedia` threw or returned no list for the query.
    #[error("media query {query:?} failed: {message}")]
    MediaQuery { query: String, message: String },
    /// A navigator / window property could not be read.
    #[error("property {name:?} unreadable: {message}")]
    Property { name: String, message: String },
    /// The host object backing the probe is gone.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// Read-only capability queries against the host environment.
pub trait CapabilityProbe {
    /// Whether the media query currently matches.
    fn matches_media(&self, query: &str) -> Result<bool, ProbeError>;

    /// Maximum simultaneous touch contacts the hardware reports.
    fn max_touch_points(&self) -> Result<u32, ProbeError>;

    /// Whether the environment exposes an `on<event>` handler for `event`.
    fn supports_event(&self, event: &str) -> Result<bool, ProbeError>;
}

/// Snapshot of the four capability signals.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `(pointer: coarse)` matches.
    pub coarse_pointer: bool,
    /// `(hover: none)` matches.
    pub cannot_hover: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: u32,
    /// `ontouchstart` exists on the window.
    pub touch_start: bool,
}

impl Capabilities {
    /// Query every signal once. Failed queries read as absent.
    pub fn probe(probe: &dyn CapabilityProbe) -> Self {
        Self {
            coarse_pointer: absent_on_error(probe.matches_media(COARSE_POINTER_QUERY), false),
            cannot_hover: absent_on_error(probe.matches_media(NO_HOVER_QUERY), false),
            max_touch_points: absent_on_error(probe.max_touch_points(), 0),
            touch_start: absent_on_error(probe.supports_event(TOUCH_START_EVENT), false),
        }
    }

    /// True when any one signal points at a touch or coarse-pointer device.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.coarse_pointer || self.cannot_hover || self.max_touch_points > 0 || self.touch_start
    }
}

fn absent_on_error<T>(result: Result<T, ProbeError>, absent: T) -> T {
    result.unwrap_or_else(|err| {
        log::debug!("capability probe failed, treating signal as absent: {err}");
        absent
    })
}

/// The environment a follower is mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// No interactive window or document.
    Headless,
    /// A live window with the probed capabilities.
    Interactive(Capabilities),
}

impl Environment {
    /// Probe the environment, or report [`Environment::Headless`] when there is
    /// nothing to probe.
    pub fn detect(probe: Option<&dyn CapabilityProbe>) -> Self {
        match probe {
            Some(probe) => Self::Interactive(Capabilities::probe(probe)),
            None => Self::Headless,
        }
    }

    /// The touch verdict. Headless environments always count as touch.
    #[must_use]
    pub fn is_touch_device(&self) -> bool {
        match self {
            Self::Headless => true,
            Self::Interactive(caps) => caps.is_touch(),
        }
    }
}
