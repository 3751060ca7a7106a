// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::PinchConfig;

/// Resting tier chosen when a gesture is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettleTier {
    /// Zoomed past `max_step_to_zoom`; rest at `max_zoom`.
    MaxZoom,
    /// Borderless detent; rest at the natural coverage factor.
    Coverage,
    /// Not zoomed far enough; rest at `1`.
    Identity,
}

/// Outcome of [`settle`]: which tier and the scale it resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// Tier that matched.
    pub tier: SettleTier,
    /// Target scale for the settle animation.
    pub target: f64,
}

/// Picks the resting scale for a released gesture.
///
/// Rules are checked in order and the first match wins:
/// 1. `scale > max_step_to_zoom` settles at `max_zoom`.
/// 2. In borderless mode, `scale` in `[borderless_min_factor, min_step_to_zoom]`
///    settles at `natural_coverage`, clamped into the zoom bounds.
/// 3. In borderless mode, `scale < borderless_min_factor` settles at `1`.
/// 4. `scale < min_step_to_zoom` settles at `1`.
///
/// Returns `None` when the current scale should stand.
#[must_use]
pub fn settle(scale: f64, natural_coverage: f64, config: &PinchConfig) -> Option<Settle> {
    let borderless = config.is_borderless(natural_coverage);
    let (tier, target) = if scale > config.max_step_to_zoom {
        (SettleTier::MaxZoom, config.max_zoom)
    } else if borderless
        && (config.borderless_min_factor..=config.min_step_to_zoom).contains(&scale)
    {
        (SettleTier::Coverage, config.clamp_zoom(natural_coverage))
    } else if scale < config.min_step_to_zoom {
        // Rules 3 and 4: `borderless_min_factor <= min_step_to_zoom`.
        (SettleTier::Identity, 1.0)
    } else {
        return None;
    };
    Some(Settle { tier, target })
}
