//! Device capability probing for the cursor follower.
//!
//! In the browser this reads `matchMedia`, `navigator.maxTouchPoints`, and
//! `ontouchstart` off the live window. Without the `hydrate` feature (server
//! rendering) there is nothing to probe, so detection reports a headless
//! environment and the follower stays suppressed.

#[cfg(test)]
#[path = "capabilities_test.rs"]
mod capabilities_test;

use motion::classify::Environment;
#[cfg(feature = "hydrate")]
use motion::classify::{CapabilityProbe, ProbeError};

/// [`CapabilityProbe`] over the current browser window.
#[cfg(feature = "hydrate")]
pub struct BrowserProbe {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl BrowserProbe {
    /// `None` when there is no window (workers, pre-render).
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

#[cfg(feature = "hydrate")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl CapabilityProbe for BrowserProbe {
    fn matches_media(&self, query: &str) -> Result<bool, ProbeError> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Ok(list.matches()),
            Ok(None) => Err(ProbeError::MediaQuery { query: query.to_owned(), message: "no MediaQueryList".to_owned() }),
            Err(err) => Err(ProbeError::MediaQuery { query: query.to_owned(), message: js_message(&err) }),
        }
    }

    fn max_touch_points(&self) -> Result<u32, ProbeError> {
        let points = self.window.navigator().max_touch_points();
        u32::try_from(points).map_err(|_| ProbeError::Property {
            name: "maxTouchPoints".to_owned(),
            message: format!("negative count {points}"),
        })
    }

    fn supports_event(&self, event: &str) -> Result<bool, ProbeError> {
        let name = format!("on{event}");
        js_sys::Reflect::has(&self.window, &wasm_bindgen::JsValue::from_str(&name))
            .map_err(|err| ProbeError::Property { message: js_message(&err), name })
    }
}

/// Classify the environment this code runs in. Call once per mount.
pub fn detect_environment() -> Environment {
    #[cfg(feature = "hydrate")]
    {
        let probe = BrowserProbe::current();
        Environment::detect(probe.as_ref().map(|p| p as &dyn CapabilityProbe))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Environment::detect(None)
    }
}
