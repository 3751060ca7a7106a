// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geometry::IntOffset;

/// Published pan/zoom state of the child surface.
///
/// `scale` multiplies the child's half-extents around its own center and
/// `offset` translates the scaled child away from its laid-out position.
/// Values are replaced wholesale on every update.
///
/// Inside the filter pipeline the same type is used in *child-center-relative*
/// form, where `offset` is the absolute position of the scaled child's center.
/// [`TransformState::rebase`] and [`TransformState::unbase`] convert between
/// the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Translation in whole pixels.
    pub offset: IntOffset,
}

impl TransformState {
    /// Scale `1`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: IntOffset::ZERO,
    };

    /// Creates a state from a scale and an offset.
    #[must_use]
    pub const fn new(scale: f64, offset: IntOffset) -> Self {
        Self { scale, offset }
    }

    /// Applies one gesture step, returning a child-center-relative candidate.
    ///
    /// The candidate scale is `scale * zoom_multiplier` and the candidate
    /// offset is `child_center + offset + pan`. A NaN multiplier is treated
    /// as `1.0`; other out-of-range values, infinities included, are left for
    /// the filters to clamp.
    #[must_use]
    pub fn predict(self, pan: IntOffset, zoom_multiplier: f64, child_center: IntOffset) -> Self {
        let zoom_multiplier = if zoom_multiplier.is_nan() {
            1.0
        } else {
            zoom_multiplier
        };
        Self {
            scale: self.scale * zoom_multiplier,
            offset: child_center + self.offset + pan,
        }
    }

    /// Moves `offset` into child-center-relative coordinates.
    #[must_use]
    pub fn rebase(self, child_center: IntOffset) -> Self {
        self.with_offset(self.offset + child_center)
    }

    /// Moves `offset` back out of child-center-relative coordinates.
    #[must_use]
    pub fn unbase(self, child_center: IntOffset) -> Self {
        self.with_offset(self.offset - child_center)
    }

    /// Returns a copy with a different scale.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Returns a copy with a different offset.
    #[must_use]
    pub fn with_offset(self, offset: IntOffset) -> Self {
        Self { offset, ..self }
    }

    /// Returns `true` if `scale` is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale >= 0.0
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
