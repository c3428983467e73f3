// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Software render target backed by an RGBA pixel buffer.
//!
//! A [`RasterTarget`] gives embedders without a scene graph a concrete
//! surface: nearest-neighbor bitmap blits with straight-alpha blending,
//! hard-edged disc fills, and single-pixel line strokes. The buffer is an
//! `image::RgbaImage`, so the result can be encoded or inspected directly.

use crate::bitmap::StampBitmap;
use crate::render::RenderTarget;
use crate::theme;
use image::{Rgba, RgbaImage};
use kurbo::{Circle, Line, Rect};
use peniko::Color;

pub struct RasterTarget {
    pixels: RgbaImage,
    color: Rgba<u8>,
}

impl RasterTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            color: color_to_rgba(theme::stamp::ACCENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    fn put(&mut self, x: i64, y: i64, pixel: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.pixels.width() && y < self.pixels.height() {
            self.pixels.put_pixel(x, y, pixel);
        }
    }
}

impl RenderTarget for RasterTarget {
    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color_to_rgba(color);
    }

    fn draw_bitmap(&mut self, bitmap: &StampBitmap, rect: Rect) {
        let width = rect.width();
        let height = rect.height();
        if width <= 0.0 || height <= 0.0 || bitmap.width() == 0 || bitmap.height() == 0 {
            return;
        }

        let x0 = rect.x0.floor().max(0.0) as u32;
        let y0 = rect.y0.floor().max(0.0) as u32;
        let x1 = (rect.x1.ceil().min(f64::from(self.pixels.width()))).max(0.0) as u32;
        let y1 = (rect.y1.ceil().min(f64::from(self.pixels.height()))).max(0.0) as u32;

        for dy in y0..y1 {
            for dx in x0..x1 {
                // Sample the source at the destination pixel's center.
                let u = (f64::from(dx) + 0.5 - rect.x0) / width * f64::from(bitmap.width());
                let v = (f64::from(dy) + 0.5 - rect.y0) / height * f64::from(bitmap.height());
                let u = (u as i64).clamp(0, i64::from(bitmap.width()) - 1) as u32;
                let v = (v as i64).clamp(0, i64::from(bitmap.height()) - 1) as u32;

                let src = bitmap.pixel(u, v);
                let dst = self.pixels.get_pixel_mut(dx, dy);
                *dst = blend_over(src, *dst);
            }
        }
    }

    fn fill_circle(&mut self, circle: Circle) {
        if circle.radius <= 0.0 {
            return;
        }
        let r2 = circle.radius * circle.radius;
        let x0 = (circle.center.x - circle.radius).floor() as i64;
        let x1 = (circle.center.x + circle.radius).ceil() as i64;
        let y0 = (circle.center.y - circle.radius).floor() as i64;
        let y1 = (circle.center.y + circle.radius).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - circle.center.x;
                let dy = y as f64 + 0.5 - circle.center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, self.color);
                }
            }
        }
    }

    fn stroke_line(&mut self, line: Line) {
        let delta = line.p1 - line.p0;
        let steps = delta.hypot().ceil().max(1.0) as i64;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = line.p0 + delta * t;
            self.put(p.x.floor() as i64, p.y.floor() as i64, self.color);
        }
    }
}

fn color_to_rgba(color: Color) -> Rgba<u8> {
    let rgba = color.to_rgba8();
    Rgba([rgba.r, rgba.g, rgba.b, rgba.a])
}

/// Straight-alpha source-over. Opaque and fully transparent sources take
/// the fast paths; everything else blends per channel with rounding.
fn blend_over(src: [u8; 4], dst: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    if sa == 255 {
        return Rgba(src);
    }
    if sa == 0 {
        return dst;
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = u32::from(src[c]);
        let d = u32::from(dst.0[c]);
        out[c] = ((s * sa + d * (255 - sa) + 127) / 255) as u8;
    }
    let da = u32::from(dst.0[3]);
    out[3] = (sa + da * (255 - sa) / 255) as u8;

    Rgba(out)
}
