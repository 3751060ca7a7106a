// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use crate::config::{ConfigError, PinchConfig};
use crate::filter::{FilterChain, FilterContext};
use crate::geometry::{IntOffset, IntRect, coverage_factor};
use crate::publish::StateCell;
use crate::settle::{Settle, settle};
use crate::state::TransformState;
use crate::tween::{EasedTween, ScalarTween};

/// Turns gesture steps and layout snapshots into published transform states.
///
/// All transitions go through `&mut self`, so gesture steps, gesture ends and
/// animation ticks are serialized by construction. A settle animation runs
/// only while no gesture step arrives: each step cancels it first, so no stale
/// tick can overwrite a newer state.
///
/// The host is expected to:
/// - Feed layout changes through [`PinchController::set_viewport`] and
///   [`PinchController::set_child`].
/// - Forward recognizer output to [`PinchController::on_gesture_step`] and
///   [`PinchController::on_gesture_end`].
/// - Call [`PinchController::advance`] once per frame while
///   [`PinchController::is_settling`] is `true`.
/// - Render from [`PinchController::state`] or a subscription on
///   [`PinchController::published_mut`].
pub struct PinchController<T = EasedTween> {
    config: PinchConfig,
    viewport: IntRect,
    child: IntRect,
    published: StateCell<TransformState>,
    tween: T,
}

impl PinchController<EasedTween> {
    /// Creates a controller with the default configuration and tween.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(PinchConfig::default(), EasedTween::new())
    }

    /// Creates a controller with `config` and the default tween.
    pub fn with_config(config: PinchConfig) -> Result<Self, ConfigError> {
        Self::with_tween(config, EasedTween::new())
    }
}

impl Default for PinchController<EasedTween> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarTween> PinchController<T> {
    /// Creates a controller with `config` driving `tween` for settle
    /// animations.
    pub fn with_tween(config: PinchConfig, tween: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, tween))
    }

    fn from_parts(config: PinchConfig, tween: T) -> Self {
        Self {
            config,
            viewport: IntRect::ZERO,
            child: IntRect::ZERO,
            published: StateCell::new(TransformState::IDENTITY),
            tween,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    /// Last known viewport rect.
    #[must_use]
    pub fn viewport(&self) -> IntRect {
        self.viewport
    }

    /// Last known child rect (as laid out, unscaled).
    #[must_use]
    pub fn child(&self) -> IntRect {
        self.child
    }

    /// Replaces the viewport snapshot.
    pub fn set_viewport(&mut self, viewport: IntRect) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?viewport, "viewport updated");
        self.viewport = viewport;
    }

    /// Replaces the child snapshot.
    pub fn set_child(&mut self, child: IntRect) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?child, "child updated");
        self.child = child;
    }

    /// Current published state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.published.get()
    }

    /// Published state cell, for polling by revision.
    #[must_use]
    pub fn published(&self) -> &StateCell<TransformState> {
        &self.published
    }

    /// Published state cell, for subscribing.
    pub fn published_mut(&mut self) -> &mut StateCell<TransformState> {
        &mut self.published
    }

    /// Coverage factor of the unscaled child against the viewport.
    #[must_use]
    pub fn natural_coverage(&self) -> f64 {
        coverage_factor(self.viewport, self.child)
    }

    /// Returns `true` if the current rects put the engine in borderless mode.
    #[must_use]
    pub fn is_borderless(&self) -> bool {
        self.config.is_borderless(self.natural_coverage())
    }

    /// Returns `true` while a settle animation is in flight.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.tween.is_running()
    }

    /// Applies one incremental gesture step.
    ///
    /// Cancels any settle animation, predicts the next state around the
    /// child's center, runs zoom, coverage and offset clamps in that order,
    /// and publishes the result.
    pub fn on_gesture_step(&mut self, pan: IntOffset, zoom_multiplier: f64) {
        self.cancel_settle();
        let child_center = self.child.center();
        let predicted = self
            .published
            .get()
            .predict(pan, zoom_multiplier, child_center);
        let cx = FilterContext::new(self.viewport, self.child, zoom_multiplier, &self.config);
        let next = FilterChain::gesture().release(&cx, predicted);
        debug_assert!(next.is_valid(), "gesture step produced {next:?}");
        #[cfg(feature = "tracing")]
        tracing::trace!(?pan, zoom_multiplier, scale = next.scale, offset = ?next.offset, "gesture step");
        self.published.set(next);
    }

    /// Handles the end of a gesture by starting a settle animation.
    ///
    /// Any settle animation still running is canceled first. Returns the
    /// chosen tier and target, or `None` when the current scale stands (or
    /// already equals the target).
    pub fn on_gesture_end(&mut self) -> Option<Settle> {
        self.cancel_settle();
        let scale = self.published.value().scale;
        let natural = self.natural_coverage();
        let Some(decision) = settle(scale, natural, &self.config) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(scale, natural, "gesture ended at a resting scale");
            return None;
        };
        if (decision.target - scale).abs() < f64::EPSILON {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scale,
            natural,
            tier = ?decision.tier,
            target = decision.target,
            "settling"
        );
        self.tween
            .start(scale, decision.target, self.config.settle_duration);
        Some(decision)
    }

    /// Advances the settle animation by `dt`.
    ///
    /// Each tick sets the animated scale and re-clamps only the offset,
    /// against the rects current at the time of the tick. Returns `true`
    /// while the animation is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(scale) = self.tween.tick(dt) else {
            return false;
        };
        let child_center = self.child.center();
        let candidate = self
            .published
            .get()
            .with_scale(scale)
            .rebase(child_center);
        let cx = FilterContext::new(self.viewport, self.child, 1.0, &self.config);
        let next = FilterChain::settle().release(&cx, candidate);
        self.published.set(next);
        let running = self.tween.is_running();
        #[cfg(feature = "tracing")]
        if !running {
            tracing::debug!(scale = next.scale, offset = ?next.offset, "settle finished");
        }
        running
    }

    /// Cancels any settle animation and publishes the identity state.
    pub fn reset(&mut self) {
        self.cancel_settle();
        self.published.set(TransformState::IDENTITY);
    }

    fn cancel_settle(&mut self) {
        if self.tween.is_running() {
            #[cfg(feature = "tracing")]
            tracing::debug!("settle canceled");
            self.tween.cancel();
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for PinchController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinchController")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("child", &self.child)
            .field("state", self.published.value())
            .field("tween", &self.tween)
            .finish()
    }
}
