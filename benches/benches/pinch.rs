// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_pinch::{
    FilterChain, FilterContext, IntOffset, IntRect, PinchConfig, PinchController, TransformState,
};

const VIEWPORT: IntRect = IntRect::new(0, 0, 1600, 900);

fn bench_filter_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/release");
    let config = PinchConfig::default();

    // Borderless child (detent path) vs. a small child (coverage clamp path).
    let children = [
        ("borderless", IntRect::new(0, 75, 1600, 825)),
        ("cover", IntRect::new(400, 225, 1200, 675)),
    ];
    for (name, child) in children {
        let cx = FilterContext::new(VIEWPORT, child, 1.02, &config);
        let predicted =
            TransformState::new(1.5, IntOffset::new(37, -12)).rebase(child.center());

        group.bench_with_input(BenchmarkId::new("gesture", name), &predicted, |b, p| {
            b.iter(|| black_box(FilterChain::gesture().release(&cx, black_box(*p))));
        });
        group.bench_with_input(BenchmarkId::new("settle", name), &predicted, |b, p| {
            b.iter(|| black_box(FilterChain::settle().release(&cx, black_box(*p))));
        });
    }
    group.finish();
}

fn bench_gesture_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/controller");

    // Hypothesis: a full pinch-out, pan and release stays well under a frame
    // budget even with 120 steps.
    for steps in [30usize, 120] {
        group.bench_with_input(BenchmarkId::new("pinch_and_settle", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut pinch = PinchController::new();
                pinch.set_viewport(VIEWPORT);
                pinch.set_child(IntRect::new(0, 75, 1600, 825));
                for i in 0..steps {
                    let zoom = if i < steps / 2 { 1.03 } else { 0.97 };
                    pinch.on_gesture_step(IntOffset::new(3, -2), zoom);
                }
                pinch.on_gesture_end();
                while pinch.advance(Duration::from_millis(16)) {}
                black_box(pinch.state())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter_chain, bench_gesture_and_settle);
criterion_main!(benches);
