// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! The stamp overlay: a rectangular image region with four corner handles.
//!
//! The stamp owns its decoded image and the handles. Handle positions are
//! recomputed from each draw call's own arguments, never nudged
//! incrementally, so repeated drags cannot accumulate error. The
//! last-rendered width/height are the source of truth for the stamp's size
//! during a drag, not the image's intrinsic dimensions.

pub mod handle;

pub use handle::CornerHandle;

use crate::bitmap::StampBitmap;
use crate::geometry::Corner;
use crate::render::RenderTarget;
use kurbo::{Point, Rect};

/// The four handles, one per corner role.
#[derive(Debug, Clone)]
pub struct CornerSet {
    top_left: CornerHandle,
    top_right: CornerHandle,
    bottom_right: CornerHandle,
    bottom_left: CornerHandle,
}

impl CornerSet {
    fn new() -> Self {
        Self {
            top_left: CornerHandle::new(Corner::TopLeft.cursor()),
            top_right: CornerHandle::new(Corner::TopRight.cursor()),
            bottom_right: CornerHandle::new(Corner::BottomRight.cursor()),
            bottom_left: CornerHandle::new(Corner::BottomLeft.cursor()),
        }
    }

    pub fn get(&self, corner: Corner) -> &CornerHandle {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    fn get_mut(&mut self, corner: Corner) -> &mut CornerHandle {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }
}

/// The manipulable image region.
#[derive(Debug, Clone)]
pub struct Stamp {
    image: Option<StampBitmap>,
    corners: CornerSet,
    current_width: f64,
    current_height: f64,
}

impl Stamp {
    pub fn new() -> Self {
        Self {
            image: None,
            corners: CornerSet::new(),
            current_width: 0.0,
            current_height: 0.0,
        }
    }

    pub fn image(&self) -> Option<&StampBitmap> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Install a decoded image, replacing any prior one. The stamp object
    /// itself persists; only its image slot changes.
    pub(crate) fn set_image(&mut self, bitmap: StampBitmap) {
        self.image = Some(bitmap);
    }

    /// Width recorded by the most recent draw.
    pub fn current_width(&self) -> f64 {
        self.current_width
    }

    /// Height recorded by the most recent draw.
    pub fn current_height(&self) -> f64 {
        self.current_height
    }

    pub fn corner(&self, corner: Corner) -> &CornerHandle {
        self.corners.get(corner)
    }

    /// The stamp's current minimum corner.
    pub fn top_left(&self) -> Point {
        self.corners.top_left.center()
    }

    /// Draw the image at `(x, y)` sized `width`×`height` and record the
    /// size. While no image is loaded the whole call is a no-op; the
    /// deferred first draw happens when the pending load completes.
    ///
    /// With `with_handles` the four handles are repositioned to this
    /// call's rectangle, drawn, and connected by the outline in the fixed
    /// cycle top-left → top-right → bottom-right → bottom-left → top-left.
    pub fn draw(
        &mut self,
        target: &mut dyn RenderTarget,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        with_handles: bool,
    ) {
        let Some(image) = &self.image else {
            return;
        };

        target.draw_bitmap(image, Rect::new(x, y, x + width, y + height));
        self.current_width = width;
        self.current_height = height;

        if !with_handles {
            return;
        }

        let positions = [
            (Corner::TopLeft, Point::new(x, y)),
            (Corner::TopRight, Point::new(x + width, y)),
            (Corner::BottomRight, Point::new(x + width, y + height)),
            (Corner::BottomLeft, Point::new(x, y + height)),
        ];
        for (corner, position) in positions {
            let handle = self.corners.get_mut(corner);
            handle.set_center(position);
            handle.draw(target);
        }

        for (from, to) in [
            (Corner::TopLeft, Corner::TopRight),
            (Corner::TopRight, Corner::BottomRight),
            (Corner::BottomRight, Corner::BottomLeft),
            (Corner::BottomLeft, Corner::TopLeft),
        ] {
            let to = self.corners.get(to).center();
            self.corners.get(from).line_to(target, to);
        }
    }

    /// True iff `p` lies strictly inside the body rectangle. A point on
    /// the boundary is not over the body, though it may be over a handle;
    /// the canvas dispatches handles first.
    pub fn is_over(&self, p: Point) -> bool {
        let min = self.corners.top_left.center();
        let max = self.corners.bottom_right.center();
        p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
    }

    /// Hit-test the handles in fixed dispatch order.
    pub fn hit_corner(&self, p: Point) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|&corner| self.corners.get(corner).is_over(p))
    }
}

impl Default for Stamp {
    fn default() -> Self {
        Self::new()
    }
}
