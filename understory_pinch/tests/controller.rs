// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pinch` crate.
//!
//! These drive `PinchController` through the public API the way a host would:
//! layout snapshots, a stream of gesture steps, release, then frame ticks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Rect, Vec2};
use understory_pinch::{
    IntOffset, IntRect, PinchConfig, PinchController, SettleTier, TransformState, reproject,
};

const FRAME: Duration = Duration::from_millis(16);

/// 16:9 viewport with a centered 16:7.5 child, as a phone gallery lays it out.
fn gallery() -> PinchController {
    let mut pinch = PinchController::new();
    pinch.set_viewport(IntRect::from_rect_rounded(Rect::new(0.0, 0.0, 1600.0, 900.0)));
    pinch.set_child(IntRect::from_rect_rounded(Rect::new(0.0, 75.0, 1600.0, 825.0)));
    pinch
}

fn settle_fully(pinch: &mut PinchController) -> usize {
    let mut frames = 0;
    while pinch.advance(FRAME) {
        frames += 1;
        assert!(frames < 1_000, "settle animation never finished");
    }
    frames
}

#[test]
fn published_scale_starts_at_one() {
    let pinch = PinchController::new();
    assert_eq!(pinch.state(), TransformState::IDENTITY);
}

#[test]
fn gallery_is_borderless() {
    let pinch = gallery();
    assert!((pinch.natural_coverage() - 1.2).abs() < 1e-12);
    assert!(pinch.is_borderless());
}

#[test]
fn growing_into_detent_snaps_to_coverage() {
    let mut pinch = gallery();
    pinch.on_gesture_step(IntOffset::ZERO, 1.12);
    assert!((pinch.state().scale - 1.2).abs() < 1e-12);
}

#[test]
fn release_inside_borderless_band_rests_at_coverage() {
    let mut pinch = gallery();
    // 1.05 then 1.2x: 1.26, above the growing detent band.
    pinch.on_gesture_step(IntOffset::ZERO, 1.05);
    pinch.on_gesture_step(IntOffset::ZERO, 1.2);
    let scale = pinch.state().scale;
    assert!((scale - 1.26).abs() < 1e-9, "scale was {scale}");

    let decision = pinch.on_gesture_end().unwrap();
    assert_eq!(decision.tier, SettleTier::Coverage);
    assert!((decision.target - 1.2).abs() < 1e-12);

    let frames = settle_fully(&mut pinch);
    assert!(frames > 0);
    assert!((pinch.state().scale - 1.2).abs() < 1e-12);
}

#[test]
fn release_below_borderless_band_rests_at_one() {
    let mut pinch = gallery();
    pinch.on_gesture_step(IntOffset::ZERO, 1.05);
    let decision = pinch.on_gesture_end().unwrap();
    assert_eq!(decision.tier, SettleTier::Identity);
    settle_fully(&mut pinch);
    assert_eq!(pinch.state(), TransformState::IDENTITY);
}

#[test]
fn release_past_max_step_rests_at_max_zoom() {
    let mut pinch = gallery();
    for _ in 0..10 {
        pinch.on_gesture_step(IntOffset::ZERO, 1.5);
    }
    let config = *pinch.config();
    assert_eq!(pinch.state().scale, config.max_zoom);
    // Already resting on the MaxZoom tier, so nothing animates.
    assert!(pinch.on_gesture_end().is_none());
    assert_eq!(settle_fully(&mut pinch), 0);
    assert_eq!(pinch.state().scale, config.max_zoom);
}

#[test]
fn zoomed_child_pans_but_never_exposes_viewport() {
    let mut pinch = gallery();
    pinch.on_gesture_step(IntOffset::ZERO, 3.0);
    let viewport = pinch.viewport();
    let child = pinch.child();

    for pan in [
        Vec2::new(5_000.0, 0.0),
        Vec2::new(-9_000.0, 3_000.0),
        Vec2::new(12.4, -7.6),
        Vec2::new(0.0, -9_999.0),
    ] {
        pinch.on_gesture_step(IntOffset::from_vec2_rounded(pan), 1.0);
        let s = pinch.state();
        let projected = reproject(child, s.scale, child.center() + s.offset);
        assert!(projected.left <= viewport.left, "{projected:?}");
        assert!(projected.right >= viewport.right, "{projected:?}");
        assert!(projected.top <= viewport.top, "{projected:?}");
        assert!(projected.bottom >= viewport.bottom, "{projected:?}");
    }
}

#[test]
fn subscribers_receive_each_published_state() {
    let mut pinch = gallery();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    pinch
        .published_mut()
        .subscribe(move |s: &TransformState| sink.borrow_mut().push(*s));

    pinch.on_gesture_step(IntOffset::ZERO, 2.0);
    pinch.on_gesture_step(IntOffset::new(50, 0), 1.0);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(pinch.published().revision(), 2);
    assert_eq!(*seen.borrow().last().unwrap(), pinch.state());
}

#[test]
fn new_gesture_wins_over_in_flight_settle() {
    let mut pinch = gallery();
    pinch.on_gesture_step(IntOffset::ZERO, 1.05);
    pinch.on_gesture_end().unwrap();
    assert!(pinch.advance(FRAME));

    pinch.on_gesture_step(IntOffset::ZERO, 2.0);
    let newest = pinch.state();
    assert!(!pinch.is_settling());
    for _ in 0..20 {
        pinch.advance(FRAME);
    }
    assert_eq!(pinch.state(), newest);
}

#[test]
fn custom_thresholds_are_honored() {
    let config = PinchConfig {
        min_zoom: 0.5,
        max_zoom: 4.0,
        min_step_to_zoom: 1.5,
        max_step_to_zoom: 3.5,
        settle_duration: Duration::from_millis(48),
        ..PinchConfig::default()
    };
    let mut pinch = PinchController::with_config(config).unwrap();
    let r = IntRect::new(0, 0, 400, 300);
    pinch.set_viewport(r);
    pinch.set_child(r);

    pinch.on_gesture_step(IntOffset::ZERO, 0.1);
    assert_eq!(pinch.state().scale, 0.5);

    pinch.on_gesture_end().unwrap();
    assert_eq!(settle_fully(&mut pinch), 2);
    assert_eq!(pinch.state(), TransformState::IDENTITY);
}
