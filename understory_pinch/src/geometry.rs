// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer rectangle geometry: aspect ratio, coverage and reprojection.
//!
//! Layout measurements and gesture pans arrive as floats from the host; the
//! constraint engine works on whole pixels so that repeated clamping settles
//! on exact edges. [`IntRect::from_rect_rounded`] and
//! [`IntOffset::from_vec2_rounded`] are the bridge from `kurbo` values.

use core::ops::{Add, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Rect, Vec2};

/// A 2D offset in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntOffset {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl IntOffset {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates an offset from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a float vector to the nearest whole-pixel offset.
    ///
    /// Non-finite components become `0`.
    #[must_use]
    pub fn from_vec2_rounded(v: Vec2) -> Self {
        Self {
            x: round_to_i32(v.x),
            y: round_to_i32(v.y),
        }
    }

    /// Returns this offset as a `kurbo` vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for IntOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for IntOffset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl Neg for IntOffset {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x.saturating_neg(),
            y: self.y.saturating_neg(),
        }
    }
}

impl From<IntOffset> for Vec2 {
    fn from(offset: IntOffset) -> Self {
        offset.to_vec2()
    }
}

/// An axis-aligned rectangle with integer edges.
///
/// Callers may hand in rectangles whose `right < left` or `bottom < top`;
/// every size computation in this crate uses the absolute extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl IntRect {
    /// The empty rectangle at the origin; the value of a rect that has not
    /// been measured yet.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Creates a rectangle from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rounds each edge of a float rectangle to the nearest pixel.
    #[must_use]
    pub fn from_rect_rounded(rect: Rect) -> Self {
        Self {
            left: round_to_i32(rect.x0),
            top: round_to_i32(rect.y0),
            right: round_to_i32(rect.x1),
            bottom: round_to_i32(rect.y1),
        }
    }

    /// Returns this rectangle as a `kurbo` rect.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Signed width, `right - left`.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Signed height, `bottom - top`.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Center point, truncating toward zero on odd extents.
    #[must_use]
    pub fn center(&self) -> IntOffset {
        IntOffset {
            x: midpoint(self.left, self.right),
            y: midpoint(self.top, self.bottom),
        }
    }

    /// Returns `true` if the width or height is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the same rectangle with `left <= right` and `top <= bottom`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    fn abs_width(&self) -> f64 {
        f64::from(self.width().unsigned_abs())
    }

    fn abs_height(&self) -> f64 {
        f64::from(self.height().unsigned_abs())
    }
}

impl From<IntRect> for Rect {
    fn from(rect: IntRect) -> Self {
        rect.to_rect()
    }
}

/// Ratio `|width| / |height|`, or `None` for a zero-height rectangle.
#[must_use]
pub fn aspect_ratio(rect: IntRect) -> Option<f64> {
    if rect.height() == 0 {
        return None;
    }
    Some(rect.abs_width() / rect.abs_height())
}

/// Factor by which `b` must be scaled, keeping its aspect ratio, to fully
/// cover `a`.
///
/// If `a` is relatively wider than `b` the widths decide, otherwise the
/// heights do. A zero width or height on either side yields `1.0`, meaning
/// coverage is treated as already satisfied.
#[must_use]
pub fn coverage_factor(a: IntRect, b: IntRect) -> f64 {
    if a.is_degenerate() || b.is_degenerate() {
        return 1.0;
    }
    let (Some(ratio_a), Some(ratio_b)) = (aspect_ratio(a), aspect_ratio(b)) else {
        return 1.0;
    };
    if ratio_a > ratio_b {
        a.abs_width() / b.abs_width()
    } else {
        a.abs_height() / b.abs_height()
    }
}

/// Places `rect`, scaled by `scale` around its own center, so that its center
/// lands on `center`.
///
/// Half-extents are `scale * |width| / 2` and `scale * |height| / 2`, rounded
/// to the nearest pixel. A negative or non-finite scale collapses the result
/// to a point.
#[must_use]
pub fn reproject(rect: IntRect, scale: f64, center: IntOffset) -> IntRect {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        0.0
    };
    let radius_x = round_to_i32(scale * rect.abs_width() / 2.0);
    let radius_y = round_to_i32(scale * rect.abs_height() / 2.0);
    IntRect {
        left: center.x.saturating_sub(radius_x),
        top: center.y.saturating_sub(radius_y),
        right: center.x.saturating_add(radius_x),
        bottom: center.y.saturating_add(radius_y),
    }
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
pub(crate) fn round_to_i32(v: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int `as` saturates and maps NaN to zero"
    )]
    {
        (v + 0.5).floor() as i32
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    let mid = (i64::from(a) + i64::from(b)) / 2;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the mean of two i32 values fits in i32"
    )]
    {
        mid as i32
    }
}
