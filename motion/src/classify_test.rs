use std::cell::Cell;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Probe with fixed answers; `None` makes the query fail.
#[derive(Default)]
struct FakeProbe {
    coarse: Option<bool>,
    no_hover: Option<bool>,
    touch_points: Option<u32>,
    touch_start: Option<bool>,
    calls: Cell<usize>,
}

impl FakeProbe {
    fn answering(coarse: bool, no_hover: bool, touch_points: u32, touch_start: bool) -> Self {
        Self {
            coarse: Some(coarse),
            no_hover: Some(no_hover),
            touch_points: Some(touch_points),
            touch_start: Some(touch_start),
            calls: Cell::new(0),
        }
    }
}

fn fail(what: &str) -> ProbeError {
    ProbeError::Property { name: what.to_owned(), message: "boom".to_owned() }
}

impl CapabilityProbe for FakeProbe {
    fn matches_media(&self, query: &str) -> Result<bool, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        let answer = match query {
            COARSE_POINTER_QUERY => self.coarse,
            NO_HOVER_QUERY => self.no_hover,
            _ => Some(false),
        };
        answer.ok_or_else(|| ProbeError::MediaQuery { query: query.to_owned(), message: "boom".to_owned() })
    }

    fn max_touch_points(&self) -> Result<u32, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        self.touch_points.ok_or_else(|| fail("maxTouchPoints"))
    }

    fn supports_event(&self, event: &str) -> Result<bool, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(event, TOUCH_START_EVENT);
        self.touch_start.ok_or_else(|| fail("ontouchstart"))
    }
}

// =============================================================
// Capabilities::is_touch
// =============================================================

#[test]
fn is_touch_is_logical_or_over_all_sixteen_combinations() {
    for bits in 0u8..16 {
        let caps = Capabilities {
            coarse_pointer: bits & 0b0001 != 0,
            cannot_hover: bits & 0b0010 != 0,
            max_touch_points: u32::from(bits & 0b0100 != 0),
            touch_start: bits & 0b1000 != 0,
        };
        assert_eq!(caps.is_touch(), bits != 0, "combination {bits:04b}");
    }
}

#[test]
fn any_positive_touch_point_count_counts() {
    let caps = Capabilities { max_touch_points: 10, ..Capabilities::default() };
    assert!(caps.is_touch());
}

#[test]
fn default_capabilities_are_not_touch() {
    assert!(!Capabilities::default().is_touch());
}

// =============================================================
// Environment
// =============================================================

#[test]
fn headless_is_touch_regardless_of_signals() {
    assert!(Environment::Headless.is_touch_device());
    assert!(Environment::detect(None).is_touch_device());
}

#[test]
fn interactive_follows_capabilities() {
    let desktop = Environment::Interactive(Capabilities::default());
    assert!(!desktop.is_touch_device());

    let phone = Environment::Interactive(Capabilities { coarse_pointer: true, ..Capabilities::default() });
    assert!(phone.is_touch_device());
}

#[test]
fn detect_probes_each_signal_once() {
    let probe = FakeProbe::answering(false, false, 0, false);
    let env = Environment::detect(Some(&probe));
    assert_eq!(env, Environment::Interactive(Capabilities::default()));
    assert_eq!(probe.calls.get(), 4);
}

#[test]
fn detect_reads_probe_answers() {
    let probe = FakeProbe::answering(false, true, 5, false);
    let Environment::Interactive(caps) = Environment::detect(Some(&probe)) else {
        panic!("expected interactive environment");
    };
    assert!(!caps.coarse_pointer);
    assert!(caps.cannot_hover);
    assert_eq!(caps.max_touch_points, 5);
    assert!(!caps.touch_start);
}

// =============================================================
// Probe failures
// =============================================================

#[test]
fn failing_queries_read_as_absent() {
    let probe = FakeProbe::default();
    let caps = Capabilities::probe(&probe);
    assert_eq!(caps, Capabilities::default());
    assert!(!caps.is_touch());
}

#[test]
fn one_failing_query_does_not_mask_others() {
    let probe = FakeProbe { touch_start: Some(true), ..FakeProbe::default() };
    let caps = Capabilities::probe(&probe);
    assert!(caps.touch_start);
    assert!(caps.is_touch());
}

#[test]
fn probe_error_messages() {
    let err = ProbeError::MediaQuery { query: "(hover: none)".to_owned(), message: "nope".to_owned() };
    assert_eq!(err.to_string(), "media query \"(hover: none)\" failed: nope");
    assert_eq!(ProbeError::Unavailable("navigator").to_string(), "navigator unavailable");
}
