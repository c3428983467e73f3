// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate spaces and corner roles.
//!
//! Pointer events arrive in device pixels; the stamp lives in the surface's
//! internal buffer coordinates. When layout scales the surface on screen the
//! two differ by an independent horizontal and vertical ratio, fixed at
//! canvas construction. Every pointer position must pass through
//! [`DisplayMap::to_buffer`] before hit-testing or any state-machine logic.

use crate::error::ConfigError;
use kurbo::Point;
use serde::{Deserialize, Serialize};

// ============================================================================
// DISPLAY MAP
// ============================================================================

/// Maps device-pixel positions into surface-buffer coordinates.
///
/// The ratios are buffer size over displayed size; they never change for
/// the lifetime of the owning canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMap {
    width_ratio: f64,
    height_ratio: f64,
}

impl DisplayMap {
    /// Build a map from the buffer dimensions and the displayed (layout)
    /// dimensions.
    ///
    /// Rejects zero buffer dimensions and non-positive or non-finite
    /// display dimensions: either would make the ratios undefined.
    pub fn new(
        buffer_width: u32,
        buffer_height: u32,
        display_width: f64,
        display_height: f64,
    ) -> Result<Self, ConfigError> {
        if buffer_width == 0 || buffer_height == 0 {
            return Err(ConfigError::InvalidBufferSize {
                width: buffer_width,
                height: buffer_height,
            });
        }
        if !(display_width.is_finite() && display_width > 0.0)
            || !(display_height.is_finite() && display_height > 0.0)
        {
            return Err(ConfigError::InvalidDisplaySize {
                width: display_width,
                height: display_height,
            });
        }

        Ok(Self {
            width_ratio: f64::from(buffer_width) / display_width,
            height_ratio: f64::from(buffer_height) / display_height,
        })
    }

    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    /// Convert a device-pixel position to buffer coordinates.
    ///
    /// `origin` is the surface's on-screen top-left, taken from the
    /// bounding rectangle the pointer-event source supplies per event.
    pub fn to_buffer(&self, device: Point, origin: Point) -> Point {
        Point::new(
            (device.x - origin.x) * self.width_ratio,
            (device.y - origin.y) * self.height_ratio,
        )
    }

    /// Convert a buffer position back to device pixels. Inverse of
    /// [`Self::to_buffer`].
    pub fn to_display(&self, buffer: Point, origin: Point) -> Point {
        Point::new(
            buffer.x / self.width_ratio + origin.x,
            buffer.y / self.height_ratio + origin.y,
        )
    }
}

// ============================================================================
// CORNERS
// ============================================================================

/// One of the stamp's four corner roles.
///
/// Hit-test dispatch checks corners in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in hit-test dispatch order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The geometrically opposite corner: the one held fixed while this
    /// corner is dragged during a resize.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }

    /// True for corners on the rectangle's left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// True for corners on the rectangle's top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// The static cursor hint for this corner role.
    pub fn cursor(self) -> CursorHint {
        match self {
            Corner::TopLeft => CursorHint::NwResize,
            Corner::TopRight => CursorHint::NeResize,
            Corner::BottomRight => CursorHint::SeResize,
            Corner::BottomLeft => CursorHint::SwResize,
        }
    }
}

/// Advisory cursor shape for the embedder to display.
///
/// Purely presentational; returning one from a pointer-move has no
/// state-machine side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Default,
    Move,
    /// Resize along the NW-SE axis
    NwResize,
    /// Resize along the NE-SW axis
    NeResize,
    /// Resize along the SE-NW axis
    SeResize,
    /// Resize along the SW-NE axis
    SwResize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_scales_relative_to_origin() {
        let map = DisplayMap::new(1600, 600, 800.0, 300.0).unwrap();
        assert_eq!(map.width_ratio(), 2.0);
        assert_eq!(map.height_ratio(), 2.0);

        let p = map.to_buffer(Point::new(110.0, 60.0), Point::new(10.0, 10.0));
        assert_eq!(p, Point::new(200.0, 100.0));
    }

    #[test]
    fn unscaled_surface_passes_positions_through() {
        let map = DisplayMap::new(800, 600, 800.0, 600.0).unwrap();
        let p = map.to_buffer(Point::new(42.5, 17.0), Point::ZERO);
        assert_eq!(p, Point::new(42.5, 17.0));
    }

    #[test]
    fn round_trip_within_tolerance() {
        let map = DisplayMap::new(1200, 900, 640.0, 480.0).unwrap();
        let origin = Point::new(33.0, 7.5);

        for device in [
            Point::new(33.0, 7.5),
            Point::new(100.25, 200.75),
            Point::new(672.9, 487.1),
        ] {
            let buffer = map.to_buffer(device, origin);
            let back = map.to_display(buffer, origin);
            assert!((back.x - device.x).abs() < 1e-9);
            assert!((back.y - device.y).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_display_size_is_rejected() {
        let err = DisplayMap::new(800, 600, 0.0, 600.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDisplaySize { .. }));
    }

    #[test]
    fn non_finite_display_size_is_rejected() {
        assert!(DisplayMap::new(800, 600, f64::NAN, 600.0).is_err());
        assert!(DisplayMap::new(800, 600, 800.0, f64::INFINITY).is_err());
        assert!(DisplayMap::new(800, 600, -640.0, 480.0).is_err());
    }

    #[test]
    fn zero_buffer_size_is_rejected() {
        let err = DisplayMap::new(0, 600, 800.0, 600.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBufferSize { .. }));
    }

    #[test]
    fn opposite_corners_pair_up() {
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
            assert_ne!(corner.opposite(), corner);
        }
        assert_eq!(Corner::TopLeft.opposite(), Corner::BottomRight);
        assert_eq!(Corner::TopRight.opposite(), Corner::BottomLeft);
    }

    #[test]
    fn cursor_hints_are_per_role() {
        assert_eq!(Corner::TopLeft.cursor(), CursorHint::NwResize);
        assert_eq!(Corner::TopRight.cursor(), CursorHint::NeResize);
        assert_eq!(Corner::BottomRight.cursor(), CursorHint::SeResize);
        assert_eq!(Corner::BottomLeft.cursor(), CursorHint::SwResize);
    }
}
