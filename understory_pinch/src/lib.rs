// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch --heading-base-level=0

//! Understory Pinch: pinch-zoom and pan constraints for a child surface.
//!
//! This crate provides a small, headless engine that keeps a zoomable,
//! pannable "child" rectangle visually sane inside a fixed "viewport"
//! rectangle. It focuses on:
//! - Integer rectangle geometry: aspect ratio, coverage factor, reprojection.
//! - An ordered set of constraint filters (zoom clamp, coverage clamp,
//!   offset clamp) applied to a predicted transform.
//! - A settle/snap decision table that picks a resting zoom tier when the
//!   gesture is released, and a host-driven tween to animate there.
//!
//! It does **not** recognize gestures, measure layout, or render. Callers are
//! expected to:
//! - Measure the viewport and child rects in their layout system and feed
//!   them to [`PinchController::set_viewport`] / [`PinchController::set_child`]
//!   (for example via [`IntRect::from_rect_rounded`]).
//! - Run their own multi-touch recognizer (touch slop, centroid, etc.) and
//!   forward per-frame pan and zoom deltas to
//!   [`PinchController::on_gesture_step`], then call
//!   [`PinchController::on_gesture_end`] when all pointers lift.
//! - Drive [`PinchController::advance`] from their frame clock while a
//!   settle animation runs.
//! - Apply the published [`TransformState`] to the child surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_pinch::{IntOffset, IntRect, PinchController, TransformState};
//!
//! let mut pinch = PinchController::new();
//! pinch.set_viewport(IntRect::new(0, 0, 400, 300));
//! pinch.set_child(IntRect::new(0, 0, 400, 300));
//!
//! // Two fingers spread: double the size, no pan.
//! pinch.on_gesture_step(IntOffset::ZERO, 2.0);
//! assert_eq!(pinch.state(), TransformState::new(2.0, IntOffset::ZERO));
//!
//! // Pinch back in past the snap threshold and let go.
//! pinch.on_gesture_step(IntOffset::ZERO, 0.48);
//! assert!(pinch.on_gesture_end().is_some());
//! while pinch.advance(Duration::from_millis(16)) {}
//! assert_eq!(pinch.state(), TransformState::IDENTITY);
//! ```
//!
//! ## Design notes
//!
//! - Scale pivots around the child's own center. Filters therefore work in
//!   child-center-relative coordinates and the result is converted back
//!   before publishing (see [`TransformState::rebase`]).
//! - Filter queues are per call: a [`FilterChain`] is built, consumed by
//!   [`FilterChain::release`], and never shared.
//! - When the child's natural coverage factor is close to `1`
//!   ([`PinchConfig::borderless_mode_factor`]) the engine runs in *borderless*
//!   mode: instead of forcing coverage it adds a detent at the natural
//!   coverage boundary, and the settle table may rest there.
//! - Degenerate geometry never propagates NaN or infinities into the state;
//!   an unmeasured rect counts as already covered.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: float math backend, forwarded to Kurbo.
//! - `tracing`: emit `tracing` events for steps, settle decisions and
//!   animation lifecycle.
//! - `serde`: derive `Serialize`/`Deserialize` for [`PinchConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod filter;
mod geometry;
pub mod publish;
mod settle;
mod state;
pub mod tween;

pub use config::{ConfigError, PinchConfig};
pub use controller::PinchController;
pub use filter::{Filter, FilterChain, FilterContext};
pub use geometry::{IntOffset, IntRect, aspect_ratio, coverage_factor, reproject};
pub use publish::{StateCell, SubscriptionId};
pub use settle::{Settle, SettleTier, settle};
pub use state::TransformState;
pub use tween::{EasedTween, ScalarTween};
