// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Corner handle primitives: a circular hit-target anchored at a stamp
//! corner, drawn as a filled disc with a stroked edge to its neighbor.

use crate::geometry::CursorHint;
use crate::render::RenderTarget;
use crate::theme;
use kurbo::{Circle, Line, Point};

/// A circular grab target at one corner of the stamp.
///
/// Created once with the stamp and repositioned in place on every redraw;
/// the radius and cursor hint never change after construction.
#[derive(Debug, Clone)]
pub struct CornerHandle {
    center: Point,
    radius: f64,
    cursor: CursorHint,
}

impl CornerHandle {
    pub(crate) fn new(cursor: CursorHint) -> Self {
        Self {
            center: Point::ZERO,
            radius: theme::size::HANDLE_RADIUS,
            cursor,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    pub(crate) fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// True iff `p` lies within the handle's disc (boundary inclusive).
    pub fn is_over(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Draw the handle as a filled disc.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_circle(Circle::new(self.center, self.radius));
    }

    /// Stroke a segment from this handle's center to `to`. The stamp uses
    /// this to trace the outline between adjacent handles.
    pub fn line_to(&self, target: &mut dyn RenderTarget, to: Point) {
        target.stroke_line(Line::new(self.center, to));
    }
}
