// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint filters over a predicted [`TransformState`].
//!
//! ## Usage
//!
//! 1) Predict a candidate with [`TransformState::predict`]; the candidate is in
//!    child-center-relative coordinates.
//! 2) Build a [`FilterChain`] for this one call, either by hand with
//!    [`FilterChain::with`] or via [`FilterChain::gesture`] /
//!    [`FilterChain::settle`].
//! 3) Call [`FilterChain::release`], which applies the filters in insertion
//!    order and returns a publishable (viewport-relative) state.
//!
//! Order matters: [`Filter::CoverageClamp`] assumes the scale is already
//! inside the zoom bounds, and [`Filter::OffsetClamp`] assumes the scale is
//! final.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pinch::{
//!     Filter, FilterChain, FilterContext, IntOffset, IntRect, PinchConfig, TransformState,
//! };
//!
//! let config = PinchConfig::default();
//! let viewport = IntRect::new(0, 0, 400, 300);
//! let child = IntRect::new(0, 0, 400, 300);
//! let cx = FilterContext::new(viewport, child, 2.0, &config);
//!
//! let predicted = TransformState::IDENTITY.predict(IntOffset::ZERO, 2.0, child.center());
//! let out = FilterChain::new()
//!     .with(Filter::ZoomClamp)
//!     .with(Filter::OffsetClamp)
//!     .release(&cx, predicted);
//! assert_eq!(out, TransformState::new(2.0, IntOffset::ZERO));
//! ```

use smallvec::SmallVec;

use crate::config::PinchConfig;
use crate::geometry::{IntRect, coverage_factor, reproject};
use crate::state::TransformState;

/// One named constraint.
///
/// Filters are pure functions of `(state, viewport, child)`; they operate on
/// child-center-relative states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Clamp `scale` into `[min_zoom, max_zoom]`.
    ZoomClamp,
    /// Keep the child large enough to cover the viewport.
    ///
    /// In borderless mode this becomes a detent instead: the scale snaps to
    /// the natural coverage factor when growing into it, and to `1` when
    /// shrinking toward it.
    CoverageClamp,
    /// Keep the viewport's edges covered, or center content that is smaller
    /// than the viewport.
    OffsetClamp,
}

impl Filter {
    /// Applies this filter to a child-center-relative `state`.
    #[must_use]
    pub fn apply(self, state: TransformState, cx: &FilterContext<'_>) -> TransformState {
        match self {
            Self::ZoomClamp => state.with_scale(cx.config.clamp_zoom(state.scale)),
            Self::CoverageClamp => clamp_coverage(state, cx),
            Self::OffsetClamp => clamp_offset(state, cx.viewport, cx.child),
        }
    }
}

/// Inputs shared by every filter in one [`FilterChain::release`].
#[derive(Clone, Copy, Debug)]
pub struct FilterContext<'a> {
    /// Last known viewport rect.
    pub viewport: IntRect,
    /// Last known child rect, as laid out (unscaled).
    pub child: IntRect,
    /// Multiplier of the gesture step being filtered; `> 1` is growing.
    pub zoom_multiplier: f64,
    /// Thresholds.
    pub config: &'a PinchConfig,
}

impl<'a> FilterContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(
        viewport: IntRect,
        child: IntRect,
        zoom_multiplier: f64,
        config: &'a PinchConfig,
    ) -> Self {
        Self {
            viewport,
            child,
            zoom_multiplier,
            config,
        }
    }

    /// Coverage factor of the unscaled child against the viewport.
    #[must_use]
    pub fn natural_coverage(&self) -> f64 {
        coverage_factor(self.viewport, self.child)
    }
}

/// An ordered, duplicate-free list of filters built for a single release.
///
/// Adding a filter that is already present keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: SmallVec<[Filter; 3]>,
}

impl FilterChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The order used for live gesture steps: zoom, coverage, offset.
    #[must_use]
    pub fn gesture() -> Self {
        Self::new()
            .with(Filter::ZoomClamp)
            .with(Filter::CoverageClamp)
            .with(Filter::OffsetClamp)
    }

    /// The chain used on settle animation ticks; only the offset is clamped.
    #[must_use]
    pub fn settle() -> Self {
        Self::new().with(Filter::OffsetClamp)
    }

    /// Appends `filter` unless it is already queued.
    #[must_use]
    pub fn with(mut self, filter: Filter) -> Self {
        if !self.filters.contains(&filter) {
            self.filters.push(filter);
        }
        self
    }

    /// Queued filters in application order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns `true` if no filter is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Applies the queued filters to a child-center-relative `predicted`
    /// state and returns the viewport-relative result.
    #[must_use]
    pub fn release(self, cx: &FilterContext<'_>, predicted: TransformState) -> TransformState {
        self.filters
            .iter()
            .fold(predicted, |state, filter| filter.apply(state, cx))
            .unbase(cx.child.center())
    }
}

fn clamp_coverage(state: TransformState, cx: &FilterContext<'_>) -> TransformState {
    let natural = cx.natural_coverage();
    let config = cx.config;
    if config.is_borderless(natural) {
        let scale = state.scale;
        if cx.zoom_multiplier > 1.0 && (config.borderless_min_factor..=natural).contains(&scale) {
            return state.with_scale(config.clamp_zoom(natural));
        }
        if cx.zoom_multiplier < 1.0 && (1.0..=config.borderless_min_factor).contains(&scale) {
            return state.with_scale(1.0);
        }
        return state;
    }

    let projected = reproject(cx.child, state.scale, state.offset);
    let needed = coverage_factor(cx.viewport, projected);
    if needed > 1.0 {
        state.with_scale((state.scale * needed).min(config.max_zoom))
    } else {
        state
    }
}

/// Corrects each axis independently.
///
/// When the projected child is at least as large as the viewport on an axis
/// (equal size included), it is pulled inward just far enough to close any
/// gap at the viewport's edges. When it is smaller, it is centered on the
/// viewport.
fn clamp_offset(state: TransformState, viewport: IntRect, child: IntRect) -> TransformState {
    let viewport = viewport.normalized();
    let projected = reproject(child, state.scale, state.offset);
    let center = viewport.center();
    let mut offset = state.offset;

    if viewport.height() <= projected.height() {
        if viewport.top < projected.top {
            offset.y = offset.y.saturating_sub(projected.top.saturating_sub(viewport.top));
        }
        if projected.bottom < viewport.bottom {
            offset.y = offset.y.saturating_add(viewport.bottom.saturating_sub(projected.bottom));
        }
    } else {
        offset.y = center.y;
    }

    if viewport.width() <= projected.width() {
        if viewport.left < projected.left {
            offset.x = offset.x.saturating_sub(projected.left.saturating_sub(viewport.left));
        }
        if projected.right < viewport.right {
            offset.x = offset.x.saturating_add(viewport.right.saturating_sub(projected.right));
        }
    } else {
        offset.x = center.x;
    }

    state.with_offset(offset)
}
