// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for StampCanvas
//!
//! Every handler converts the event's device position to buffer
//! coordinates first; hit-testing or transitioning on unconverted
//! positions misregisters everything on scaled surfaces.

use super::{Interaction, StampCanvas};
use crate::geometry::{Corner, CursorHint};
use crate::render::RenderTarget;
use crate::theme;
use kurbo::{Point, Rect};

/// One pointer event as delivered by the embedder's event source:
/// the device-space position and the surface's on-screen origin (the
/// top-left of its bounding rectangle at delivery time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub device_pos: Point,
    pub surface_origin: Point,
}

impl PointerEvent {
    pub fn new(device_pos: Point, surface_origin: Point) -> Self {
        Self {
            device_pos,
            surface_origin,
        }
    }

    /// An event on an unscaled surface anchored at the device origin.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), Point::ZERO)
    }
}

impl<T: RenderTarget> StampCanvas<T> {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Handle pointer down: clear, hit-test handles then body, and enter
    /// the matching interaction. A miss on both deselects the stamp
    /// (redraw without handles) and stays idle.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        let p = self.map.to_buffer(event.device_pos, event.surface_origin);
        tracing::debug!(x = p.x, y = p.y, "pointer down");

        self.target.clear();

        if let Some(corner) = self.stamp.hit_corner(p) {
            self.state = Interaction::Resizing(corner);
            self.redraw_stamp(true);
            self.last_pointer = p;
        } else if self.stamp.is_over(p) {
            self.state = Interaction::Dragging;
            self.redraw_stamp(true);
            self.last_pointer = p;
        } else {
            self.state = Interaction::Idle;
            self.redraw_stamp(false);
        }
    }

    /// Handle pointer move.
    ///
    /// While dragging, translate the stamp by the delta from the last
    /// pointer position at its last-rendered size. While resizing, move
    /// the active corner to the pointer with the opposite corner held
    /// fixed. While idle, mutate nothing and just report the advisory
    /// cursor for the hovered element.
    pub fn pointer_move(&mut self, event: PointerEvent) -> CursorHint {
        let p = self.map.to_buffer(event.device_pos, event.surface_origin);

        match self.state {
            Interaction::Dragging => {
                let delta = p - self.last_pointer;
                let origin = self.stamp.top_left() + delta;
                let width = self.stamp.current_width();
                let height = self.stamp.current_height();

                self.target.clear();
                self.stamp
                    .draw(&mut self.target, origin.x, origin.y, width, height, true);
                self.last_pointer = p;
                CursorHint::Move
            }
            Interaction::Resizing(corner) => {
                let rect = self.resize_rect(corner, p);

                self.target.clear();
                self.stamp.draw(
                    &mut self.target,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    true,
                );
                self.last_pointer = p;
                corner.cursor()
            }
            Interaction::Idle => {
                if let Some(corner) = self.stamp.hit_corner(p) {
                    corner.cursor()
                } else if self.stamp.is_over(p) {
                    CursorHint::Move
                } else {
                    CursorHint::Default
                }
            }
        }
    }

    /// Handle pointer up: the gesture ends and the machine returns to
    /// idle regardless of prior state. The last pointer position goes
    /// stale but is not cleared; the next pointer down overwrites it.
    pub fn pointer_up(&mut self, _event: PointerEvent) {
        tracing::debug!(state = ?self.state, "pointer up");
        self.state = Interaction::Idle;
    }

    /// The rectangle produced by dragging `corner` to `p` with its
    /// opposite corner anchored. Dragging past the anchor pins the
    /// rectangle at the minimum stamp size instead of inverting it.
    fn resize_rect(&self, corner: Corner, p: Point) -> Rect {
        let anchor = self.stamp.corner(corner.opposite()).center();
        let min = theme::size::MIN_STAMP_SIZE;

        let width = if corner.is_left() {
            (anchor.x - p.x).max(min)
        } else {
            (p.x - anchor.x).max(min)
        };
        let height = if corner.is_top() {
            (anchor.y - p.y).max(min)
        } else {
            (p.y - anchor.y).max(min)
        };

        let x = if corner.is_left() { anchor.x - width } else { anchor.x };
        let y = if corner.is_top() { anchor.y - height } else { anchor.y };

        Rect::new(x, y, x + width, y + height)
    }
}
