// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch basics.
//!
//! Drive a `PinchController` with a scripted two-finger gesture over a
//! 16:9 viewport holding a slightly wider child, then let it settle.
//!
//! Run:
//! - `cargo run -p understory_pinch_demos --example pinch_basics`
//! - `RUST_LOG=understory_pinch=trace cargo run -p understory_pinch_demos --example pinch_basics`

use std::time::Duration;

use kurbo::{Point, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_pinch::{IntRect, PinchController, TransformState};
use understory_pinch_demos::TwoFingerScript;

fn print_state(label: &str, s: TransformState) {
    println!(
        "{label:>10}: scale {:.3}  offset ({}, {})",
        s.scale, s.offset.x, s.offset.y
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut pinch = PinchController::new();
    pinch.set_viewport(IntRect::from_rect_rounded(Rect::new(0.0, 0.0, 1600.0, 900.0)));
    pinch.set_child(IntRect::from_rect_rounded(Rect::new(0.0, 75.0, 1600.0, 825.0)));
    println!(
        "natural coverage {:.3}, borderless: {}",
        pinch.natural_coverage(),
        pinch.is_borderless()
    );

    pinch
        .published_mut()
        .subscribe(|s: &TransformState| print_state("published", *s));

    let center = Point::new(800.0, 450.0);

    println!("-- spread to 3x, drag right, release");
    for (pan, zoom) in TwoFingerScript::spread(center, 200.0, 3.0).steps(12) {
        pinch.on_gesture_step(pan, zoom);
    }
    for (pan, zoom) in TwoFingerScript::drag(center, 600.0, Vec2::new(2_000.0, 0.0)).steps(6) {
        pinch.on_gesture_step(pan, zoom);
    }
    println!("settle: {:?}", pinch.on_gesture_end());

    println!("-- pinch in to 1.05x and release");
    for (pan, zoom) in TwoFingerScript::spread(center, 600.0, 0.35).steps(12) {
        pinch.on_gesture_step(pan, zoom);
    }
    println!("settle: {:?}", pinch.on_gesture_end());
    while pinch.advance(Duration::from_millis(16)) {}

    print_state("final", pinch.state());
}
