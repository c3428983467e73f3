// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// STAMP COLORS
// ============================================================================
// The engine draws everything it owns (handles, outline) in a single accent
// color, set on the render target once at canvas construction.
const STAMP_ACCENT: Color = Color::from_rgb8(0x31, 0x83, 0xc8);

// ============================================================================
// STAMP SIZES
// ============================================================================
/// Radius of a corner handle disc; doubles as its hit-test tolerance
const HANDLE_RADIUS: f64 = 5.0;

/// Stroke width of the outline connecting adjacent handles
const OUTLINE_WIDTH: f64 = 1.0;

/// Smallest width/height a resize gesture can shrink the stamp to.
/// Dragging a handle past its opposite corner pins the rectangle here
/// instead of inverting it.
const MIN_STAMP_SIZE: f64 = 8.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the stamp overlay (handles, connecting outline)
pub mod stamp {
    use super::Color;
    pub const ACCENT: Color = super::STAMP_ACCENT;
}

/// Sizes and tolerances for the stamp overlay
pub mod size {
    pub const HANDLE_RADIUS: f64 = super::HANDLE_RADIUS;
    pub const OUTLINE_WIDTH: f64 = super::OUTLINE_WIDTH;
    pub const MIN_STAMP_SIZE: f64 = super::MIN_STAMP_SIZE;
}
