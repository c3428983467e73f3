// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! The rendering-surface collaborator seam.
//!
//! The engine never touches pixels directly; it issues these primitives
//! against whatever target the embedder supplies. [`crate::raster`] ships a
//! software implementation for embedders without a GPU scene graph.

use crate::bitmap::StampBitmap;
use kurbo::{Circle, Line, Rect};
use peniko::Color;

/// Drawing primitives the stamp engine needs from its rendering surface.
///
/// All stroke and fill operations use the most recently set color; the
/// canvas sets [`crate::theme::stamp::ACCENT`] once at construction and
/// never changes it.
pub trait RenderTarget {
    /// Remove all prior rendering from the surface.
    fn clear(&mut self);

    /// Set the color used by subsequent fill and stroke calls.
    fn set_color(&mut self, color: Color);

    /// Draw a bitmap scaled into `rect`.
    fn draw_bitmap(&mut self, bitmap: &StampBitmap, rect: Rect);

    /// Fill a disc.
    fn fill_circle(&mut self, circle: Circle);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, line: Line);
}

#[cfg(test)]
pub(crate) mod recording {
    //! A target that records the primitives issued against it, for
    //! asserting on draw order and handle visibility in tests.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        SetColor(Color),
        Bitmap(Rect),
        Circle(Circle),
        Line(Line),
    }

    #[derive(Debug, Default)]
    pub struct RecordingTarget {
        pub ops: Vec<Op>,
    }

    impl RecordingTarget {
        pub fn new() -> Self {
            Self::default()
        }

        /// Ops issued since the most recent `Clear`.
        pub fn since_last_clear(&self) -> &[Op] {
            let start = self
                .ops
                .iter()
                .rposition(|op| *op == Op::Clear)
                .map_or(0, |i| i + 1);
            &self.ops[start..]
        }

        pub fn count_circles(&self) -> usize {
            self.since_last_clear()
                .iter()
                .filter(|op| matches!(op, Op::Circle(_)))
                .count()
        }

        pub fn last_bitmap_rect(&self) -> Option<Rect> {
            self.ops.iter().rev().find_map(|op| match op {
                Op::Bitmap(rect) => Some(*rect),
                _ => None,
            })
        }
    }

    impl RenderTarget for RecordingTarget {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn set_color(&mut self, color: Color) {
            self.ops.push(Op::SetColor(color));
        }

        fn draw_bitmap(&mut self, _bitmap: &StampBitmap, rect: Rect) {
            self.ops.push(Op::Bitmap(rect));
        }

        fn fill_circle(&mut self, circle: Circle) {
            self.ops.push(Op::Circle(circle));
        }

        fn stroke_line(&mut self, line: Line) {
            self.ops.push(Op::Line(line));
        }
    }
}
