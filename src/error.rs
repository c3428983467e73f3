// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for canvas configuration and stamp image loading.

use thiserror::Error;

/// Rejected canvas construction parameters.
///
/// The device-to-buffer coordinate ratios are fixed at construction; a
/// zero or non-finite display size would make them undefined, so the
/// constructor refuses it instead of producing NaN ratios.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("display size must be positive and finite, got {width}x{height}")]
    InvalidDisplaySize { width: f64, height: f64 },

    #[error("buffer size must be non-zero, got {width}x{height}")]
    InvalidBufferSize { width: u32, height: u32 },
}

/// A stamp image that could not be decoded or assembled.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to decode stamp image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("pixel buffer length {actual} does not match {width}x{height} RGBA dimensions")]
    PixelSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}
