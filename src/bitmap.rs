// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Decoded stamp images.
//!
//! A [`StampBitmap`] is RGBA8 pixel data wrapped in a `peniko::ImageData`
//! so scene-graph render targets can consume it without copying. Decoding
//! is synchronous; the asynchronous load protocol lives on the canvas
//! (request a load, hand the decoded bitmap back with the token).

use crate::error::LoadError;
use peniko::{Blob, ImageData, ImageFormat};
use std::path::Path;

/// A decoded RGBA8 stamp image with its intrinsic dimensions.
#[derive(Debug, Clone)]
pub struct StampBitmap {
    image_data: ImageData,
    width: u32,
    height: u32,
}

impl StampBitmap {
    /// Decode a stamp image from a file path.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let img = image::open(path)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Decode a stamp image from an encoded byte buffer (PNG, JPEG).
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, LoadError> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Wrap raw RGBA8 pixels. The buffer length must be exactly
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, LoadError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(LoadError::PixelSizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        let image_data = ImageData {
            data: Blob::from(pixels),
            format: ImageFormat::Rgba8,
            alpha_type: peniko::ImageAlphaType::Alpha,
            width,
            height,
        };

        Ok(Self {
            image_data,
            width,
            height,
        })
    }

    /// Intrinsic pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying image data, for scene-graph render targets.
    pub fn image_data(&self) -> &ImageData {
        &self.image_data
    }

    /// Read one RGBA pixel. Callers must stay in bounds.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let bytes = self.image_data.data.data();
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_validates_buffer_length() {
        let err = StampBitmap::from_rgba8(4, 4, vec![0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::PixelSizeMismatch { actual: 10, .. }
        ));
    }

    #[test]
    fn from_rgba8_keeps_dimensions() {
        let bitmap = StampBitmap::from_rgba8(3, 2, vec![0xff; 3 * 2 * 4]).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.image_data().width, 3);
    }

    #[test]
    fn pixel_reads_row_major_rgba() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        // pixel (1, 1) = opaque red
        pixels[(1 * 2 + 1) * 4..][..4].copy_from_slice(&[0xff, 0x00, 0x00, 0xff]);
        let bitmap = StampBitmap::from_rgba8(2, 2, pixels).unwrap();

        assert_eq!(bitmap.pixel(1, 1), [0xff, 0x00, 0x00, 0xff]);
        assert_eq!(bitmap.pixel(0, 0), [0, 0, 0, 0]);
    }
}
