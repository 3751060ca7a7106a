// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar tween seam used by the settle animation.
//!
//! The host owns time. It calls [`ScalarTween::tick`] (usually through
//! [`crate::PinchController::advance`]) once per frame with the elapsed
//! duration, and the tween reports the interpolated value for that frame.

use core::time::Duration;

/// A cancelable scalar animation from one value to another.
pub trait ScalarTween {
    /// Starts animating from `from` to `to` over `duration`, replacing any
    /// animation in flight.
    fn start(&mut self, from: f64, to: f64, duration: Duration);

    /// Stops the animation. Subsequent ticks yield nothing until the next
    /// [`ScalarTween::start`].
    fn cancel(&mut self);

    /// Advances by `dt` and returns the value for this frame, or `None` when
    /// idle. The final tick returns exactly the end value.
    fn tick(&mut self, dt: Duration) -> Option<f64>;

    /// Returns `true` while an animation is in flight.
    fn is_running(&self) -> bool;
}

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
pub type Easing = fn(f64) -> f64;

/// Identity easing.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// Accelerate-decelerate easing, `3t² - 2t³`.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Default [`ScalarTween`]: fixed-duration interpolation with an easing curve.
#[derive(Clone, Copy, Debug)]
pub struct EasedTween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    running: bool,
    easing: Easing,
}

impl EasedTween {
    /// Creates an idle tween using [`smoothstep`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_easing(smoothstep)
    }

    /// Creates an idle tween using `easing`.
    #[must_use]
    pub fn with_easing(easing: Easing) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            duration: Duration::ZERO,
            elapsed: Duration::ZERO,
            running: false,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`; `1` when idle.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if !self.running || self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// End value of the current (or last) animation.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }
}

impl Default for EasedTween {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarTween for EasedTween {
    fn start(&mut self, from: f64, to: f64, duration: Duration) {
        self.from = from;
        self.to = to;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn tick(&mut self, dt: Duration) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.running = false;
            return Some(self.to);
        }
        let eased = (self.easing)(self.progress());
        Some(self.from + (self.to - self.from) * eased)
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{EasedTween, ScalarTween, linear, smoothstep};

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn idle_tween_yields_nothing() {
        let mut tween = EasedTween::new();
        assert!(!tween.is_running());
        assert_eq!(tween.tick(MS * 16), None);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn linear_tween_interpolates_and_finishes_on_target() {
        let mut tween = EasedTween::with_easing(linear);
        tween.start(1.0, 2.0, MS * 200);
        let v = tween.tick(MS * 50).unwrap();
        assert!((v - 1.25).abs() < 1e-9, "value was {v}");
        let v = tween.tick(MS * 100).unwrap();
        assert!((v - 1.75).abs() < 1e-9, "value was {v}");
        assert_eq!(tween.tick(MS * 100), Some(2.0));
        assert!(!tween.is_running());
        assert_eq!(tween.tick(MS * 16), None);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tween = EasedTween::new();
        tween.start(3.0, 1.0, Duration::ZERO);
        assert!(tween.is_running());
        assert_eq!(tween.tick(Duration::ZERO), Some(1.0));
        assert!(!tween.is_running());
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut tween = EasedTween::new();
        tween.start(1.0, 8.0, MS * 200);
        assert!(tween.tick(MS * 16).is_some());
        tween.cancel();
        assert_eq!(tween.tick(MS * 16), None);
    }

    #[test]
    fn restart_replaces_animation() {
        let mut tween = EasedTween::with_easing(linear);
        tween.start(1.0, 8.0, MS * 200);
        let _ = tween.tick(MS * 100);
        tween.start(2.0, 1.0, MS * 100);
        let v = tween.tick(MS * 50).unwrap();
        assert!((v - 1.5).abs() < 1e-9, "value was {v}");
        assert_eq!(tween.target(), 1.0);
    }

    #[test]
    fn smoothstep_shape() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert!(smoothstep(0.25) < 0.25);
        assert!(smoothstep(0.75) > 0.75);
    }
}
