#![allow(clippy::float_cmp)]

use super::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn settle(track: &mut RevealTrack) -> RevealFrame {
    for _ in 0..600 {
        let frame = track.tick(FRAME_MS);
        if frame.settled {
            return frame;
        }
    }
    panic!("reveal did not settle");
}

// =============================================================
// Initial pose
// =============================================================

#[test]
fn even_card_starts_hidden_to_the_right() {
    let track = RevealTrack::card(0, &RevealConfig::default());
    let frame = track.frame();
    assert_eq!(frame.opacity, 0.0);
    assert_eq!(frame.offset_x, 50.0);
    assert_eq!(frame.scale, 1.0);
    assert!(!track.is_revealed());
}

#[test]
fn odd_card_starts_hidden_to_the_left() {
    let frame = RevealTrack::card(3, &RevealConfig::default()).frame();
    assert_eq!(frame.offset_x, -50.0);
}

#[test]
fn marker_starts_collapsed() {
    let frame = RevealTrack::marker(&RevealConfig::default()).frame();
    assert_eq!(frame.scale, 0.0);
    assert_eq!(frame.opacity, 1.0);
}

#[test]
fn unrevealed_track_stays_put() {
    let mut track = RevealTrack::card(0, &RevealConfig::default());
    let frame = track.tick(FRAME_MS);
    assert_eq!(frame.opacity, 0.0);
    assert!(frame.settled);
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn card_reveals_to_rest_pose() {
    let mut track = RevealTrack::card(1, &RevealConfig::default());
    assert!(track.on_visibility(true));

    let first = track.tick(FRAME_MS);
    assert!(first.opacity > 0.0 && first.opacity < 1.0);
    assert!(first.offset_x < 0.0 && first.offset_x > -50.0);

    let done = settle(&mut track);
    assert_eq!((done.opacity, done.offset_x, done.scale), (1.0, 0.0, 1.0));
}

#[test]
fn card_reveal_takes_configured_duration() {
    let mut track = RevealTrack::card(0, &RevealConfig::default());
    track.on_visibility(true);
    assert!(!track.tick(499.0).settled);
    assert!(track.tick(1.0).settled);
}

#[test]
fn marker_pops_in() {
    let mut track = RevealTrack::marker(&RevealConfig::default());
    track.on_visibility(true);
    let done = settle(&mut track);
    assert_eq!(done.scale, 1.0);
}

#[test]
fn not_intersecting_does_not_reveal() {
    let mut track = RevealTrack::card(0, &RevealConfig::default());
    assert!(!track.on_visibility(false));
    assert!(!track.is_revealed());
}

#[test]
fn reveal_happens_once() {
    let mut track = RevealTrack::card(0, &RevealConfig::default());
    assert!(track.on_visibility(true));
    assert!(!track.on_visibility(true));
    settle(&mut track);

    assert!(!track.on_visibility(false));
    let frame = track.tick(FRAME_MS);
    assert_eq!(frame.opacity, 1.0);
    assert!(track.is_revealed());
}

#[test]
fn custom_offset_is_used() {
    let config = RevealConfig { card_offset_px: 120.0, ..RevealConfig::default() };
    assert_eq!(RevealTrack::card(0, &config).frame().offset_x, 120.0);
}

#[test]
fn style_formats_every_channel() {
    let frame = RevealFrame { opacity: 0.5, offset_x: -12.0, scale: 1.0, settled: false };
    assert_eq!(frame.style(), "opacity: 0.500; transform: translateX(-12.00px) scale(1.000);");
}
