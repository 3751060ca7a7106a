// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

/// Zoom bounds and settle thresholds.
///
/// The defaults are tuned for a child that is laid out centered inside the
/// viewport at roughly the viewport's aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinchConfig {
    /// Smallest scale a gesture may produce.
    pub min_zoom: f64,
    /// Largest scale a gesture may produce.
    pub max_zoom: f64,
    /// Below this scale a released gesture snaps back to `1`.
    pub min_step_to_zoom: f64,
    /// Above this scale a released gesture snaps to `max_zoom`.
    pub max_step_to_zoom: f64,
    /// Borderless mode is enabled when the child's natural coverage factor is
    /// at most this value.
    pub borderless_mode_factor: f64,
    /// Lower edge of the borderless detent band.
    pub borderless_min_factor: f64,
    /// Length of the settle/snap animation.
    pub settle_duration: Duration,
}

impl PinchConfig {
    /// Checks that the thresholds are finite and consistently ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("min_step_to_zoom", self.min_step_to_zoom),
            ("max_step_to_zoom", self.max_step_to_zoom),
            ("borderless_mode_factor", self.borderless_mode_factor),
            ("borderless_min_factor", self.borderless_min_factor),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRangeInverted {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if self.min_zoom > 1.0 || self.max_zoom < 1.0 {
            return Err(ConfigError::IdentityOutsideZoomRange);
        }
        if self.borderless_min_factor > self.min_step_to_zoom
            || self.min_step_to_zoom > self.max_step_to_zoom
            || self.max_step_to_zoom > self.max_zoom
        {
            return Err(ConfigError::StepsOutOfOrder);
        }
        if self.borderless_mode_factor < 1.0 {
            return Err(ConfigError::BorderlessFactorBelowOne(
                self.borderless_mode_factor,
            ));
        }
        Ok(())
    }

    /// Clamps `scale` into `[min_zoom, max_zoom]`. NaN maps to `min_zoom`.
    #[must_use]
    pub fn clamp_zoom(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_zoom;
        }
        scale.clamp(self.min_zoom, self.max_zoom)
    }

    /// Returns `true` if a child with the given natural coverage factor gets
    /// the relaxed borderless behavior.
    #[must_use]
    pub fn is_borderless(&self, natural_coverage: f64) -> bool {
        natural_coverage <= self.borderless_mode_factor
    }
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.9,
            max_zoom: 8.05,
            min_step_to_zoom: 1.3,
            max_step_to_zoom: 8.0,
            borderless_mode_factor: 1.25,
            borderless_min_factor: 1.1,
            settle_duration: Duration::from_millis(200),
        }
    }
}

/// Error returned by [`PinchConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A threshold is zero, negative, NaN or infinite.
    NotPositive {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// `min_zoom` is greater than `max_zoom`.
    ZoomRangeInverted {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `1` is not inside `[min_zoom, max_zoom]`, so the identity tier could
    /// not be reached.
    IdentityOutsideZoomRange,
    /// The settle steps do not satisfy
    /// `borderless_min_factor <= min_step_to_zoom <= max_step_to_zoom <= max_zoom`.
    StepsOutOfOrder,
    /// `borderless_mode_factor` is below `1`, so borderless mode could never
    /// apply to a child that already covers the viewport.
    BorderlessFactorBelowOne(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { name, value } => {
                write!(f, "`{name}` must be finite and positive, got {value}")
            }
            Self::ZoomRangeInverted { min, max } => {
                write!(f, "min_zoom {min} is greater than max_zoom {max}")
            }
            Self::IdentityOutsideZoomRange => {
                f.write_str("zoom range must include the identity scale 1")
            }
            Self::StepsOutOfOrder => f.write_str(
                "expected borderless_min_factor <= min_step_to_zoom <= max_step_to_zoom <= max_zoom",
            ),
            Self::BorderlessFactorBelowOne(value) => {
                write!(f, "borderless_mode_factor must be at least 1, got {value}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
