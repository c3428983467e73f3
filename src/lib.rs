// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Signet: direct manipulation of a signature stamp on a raster surface
//!
//! The crate centers on [`StampCanvas`], which owns a render target and a
//! single [`Stamp`] overlay and classifies pointer gestures into drag and
//! resize interactions. Rendering and pointer delivery stay with the
//! embedder: any [`RenderTarget`] works as a surface ([`RasterTarget`] is
//! the built-in software one), and pointer events are handed in as plain
//! [`PointerEvent`] values in device pixels.

pub mod bitmap;
pub mod canvas;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod overlay;
pub mod raster;
pub mod render;
pub mod theme;

pub use bitmap::StampBitmap;
pub use canvas::{CanvasConfig, Interaction, LoadToken, PointerEvent, StampCanvas};
pub use error::{ConfigError, LoadError};
pub use geometry::{Corner, CursorHint, DisplayMap};
pub use overlay::{CornerHandle, Stamp};
pub use raster::RasterTarget;
pub use render::RenderTarget;
