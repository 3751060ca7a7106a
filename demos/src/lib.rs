// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the pinch demos.
//!
//! Real hosts get pan and zoom deltas from their pointer recognizer. The
//! demos synthesize the same stream from two scripted touch points so they
//! can run headless.

use kurbo::{Point, Vec2};
use understory_pinch::IntOffset;

/// Two touch points moving linearly from a start to an end position.
#[derive(Clone, Copy, Debug)]
pub struct TwoFingerScript {
    /// First finger at the start and end of the gesture.
    pub a: (Point, Point),
    /// Second finger at the start and end of the gesture.
    pub b: (Point, Point),
}

impl TwoFingerScript {
    /// Fingers spread (or pinch, for `factor < 1`) symmetrically around
    /// `center` along the horizontal axis.
    pub fn spread(center: Point, start_gap: f64, factor: f64) -> Self {
        let half = Vec2::new(start_gap / 2.0, 0.0);
        let end_half = half * factor;
        Self {
            a: (center - half, center - end_half),
            b: (center + half, center + end_half),
        }
    }

    /// Both fingers drag by `delta` without changing their gap.
    pub fn drag(center: Point, gap: f64, delta: Vec2) -> Self {
        let half = Vec2::new(gap / 2.0, 0.0);
        Self {
            a: (center - half, center - half + delta),
            b: (center + half, center + half + delta),
        }
    }

    /// Per-frame `(pan, zoom)` deltas over `frames` frames, as a recognizer
    /// would report them: centroid movement and ratio of finger distances.
    pub fn steps(&self, frames: usize) -> Vec<(IntOffset, f64)> {
        let frames = frames.max(1);
        let at = |i: usize| {
            let t = i as f64 / frames as f64;
            (self.a.0.lerp(self.a.1, t), self.b.0.lerp(self.b.1, t))
        };
        let mut out = Vec::with_capacity(frames);
        let (mut pa, mut pb) = at(0);
        for i in 1..=frames {
            let (na, nb) = at(i);
            let old_gap = (pb - pa).hypot();
            let new_gap = (nb - na).hypot();
            let zoom = if old_gap > 0.0 { new_gap / old_gap } else { 1.0 };
            let pan = na.midpoint(nb) - pa.midpoint(pb);
            out.push((IntOffset::from_vec2_rounded(pan), zoom));
            (pa, pb) = (na, nb);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::TwoFingerScript;

    #[test]
    fn spread_multiplies_to_factor() {
        let script = TwoFingerScript::spread(Point::new(100.0, 100.0), 100.0, 2.0);
        let total: f64 = script.steps(10).iter().map(|(_, z)| z).product();
        assert!((total - 2.0).abs() < 1e-9, "total zoom was {total}");
    }

    #[test]
    fn drag_has_no_zoom() {
        let script = TwoFingerScript::drag(Point::new(0.0, 0.0), 80.0, Vec2::new(40.0, -20.0));
        for (pan, zoom) in script.steps(4) {
            assert_eq!(zoom, 1.0);
            assert_eq!((pan.x, pan.y), (10, -5));
        }
    }
}
