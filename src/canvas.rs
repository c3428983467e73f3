// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! The manipulation canvas: owns the render target and the stamp, runs the
//! pointer interaction state machine, and brokers asynchronous image loads.
//!
//! Everything here executes synchronously inside the embedder's event
//! callbacks on one thread; each handler runs to completion (clear +
//! redraw) before the next event is processed, so redraws never
//! interleave. The one asynchronous boundary is image decode: the embedder
//! requests a load with [`StampCanvas::render_image`], decodes however it
//! likes, and hands the result back through
//! [`StampCanvas::finish_image_load`] with the token it was given.

mod pointer;

pub use pointer::PointerEvent;

use crate::bitmap::StampBitmap;
use crate::error::{ConfigError, LoadError};
use crate::geometry::DisplayMap;
use crate::overlay::Stamp;
use crate::render::RenderTarget;
use crate::theme;
use kurbo::Point;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Canvas construction parameters: the internal buffer size and the size
/// the surface is displayed at, which together fix the coordinate ratios
/// for the canvas's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub display_width: f64,
    pub display_height: f64,
}

impl CanvasConfig {
    /// A surface displayed at its buffer size (1:1 ratios).
    pub fn unscaled(width: u32, height: u32) -> Self {
        Self {
            buffer_width: width,
            buffer_height: height,
            display_width: f64::from(width),
            display_height: f64::from(height),
        }
    }
}

// ============================================================================
// INTERACTION STATE
// ============================================================================

/// What the current pointer gesture is doing to the stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    Idle,
    Dragging,
    Resizing(crate::geometry::Corner),
}

// ============================================================================
// IMAGE LOAD PROTOCOL
// ============================================================================

/// Ticket for one requested image load. Returned by
/// [`StampCanvas::render_image`] and presented back to
/// [`StampCanvas::finish_image_load`]; a token from a superseded request
/// is stale and its completion is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Placement captured by value when a load was requested, so a completion
/// draws with the parameters of the call that triggered it rather than
/// whatever is current by then.
#[derive(Debug, Clone, Copy)]
struct PendingPlacement {
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
}

// ============================================================================
// CANVAS
// ============================================================================

/// The addressable drawing surface with its one stamp overlay.
pub struct StampCanvas<T> {
    target: T,
    map: DisplayMap,
    stamp: Stamp,
    state: Interaction,
    last_pointer: Point,
    generation: u64,
    pending: Option<PendingPlacement>,
}

impl<T: RenderTarget> StampCanvas<T> {
    /// Take ownership of a render target and fix the coordinate ratios
    /// from `config`. Fails if the configured sizes would make the ratios
    /// undefined.
    pub fn new(mut target: T, config: CanvasConfig) -> Result<Self, ConfigError> {
        let map = DisplayMap::new(
            config.buffer_width,
            config.buffer_height,
            config.display_width,
            config.display_height,
        )?;
        target.set_color(theme::stamp::ACCENT);

        Ok(Self {
            target,
            map,
            stamp: Stamp::new(),
            state: Interaction::Idle,
            last_pointer: Point::ZERO,
            generation: 0,
            pending: None,
        })
    }

    /// Request a new stamp image, replacing any prior one. Clears the
    /// surface, captures the placement, and returns the token to present
    /// with the decoded result. `width`/`height` default to the bitmap's
    /// intrinsic size at completion time. Requesting again before the
    /// previous load completes orphans the previous token.
    pub fn render_image(
        &mut self,
        source: &str,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) -> LoadToken {
        self.target.clear();
        self.generation += 1;
        self.pending = Some(PendingPlacement {
            x,
            y,
            width,
            height,
        });
        tracing::info!(source, x, y, "requesting stamp image");

        LoadToken {
            generation: self.generation,
        }
    }

    /// Complete a load requested by [`Self::render_image`].
    ///
    /// A stale token (superseded by a newer `render_image`) is discarded
    /// and reported as `Ok(false)`; only the most recent request's
    /// completion draws. A decode failure is logged and propagated to the
    /// owning collaborator rather than swallowed. On success the deferred
    /// first draw runs with the captured placement and `Ok(true)` is
    /// returned.
    pub fn finish_image_load(
        &mut self,
        token: LoadToken,
        result: Result<StampBitmap, LoadError>,
    ) -> Result<bool, LoadError> {
        if token.generation != self.generation {
            tracing::debug!(
                token = token.generation,
                current = self.generation,
                "discarding stale stamp image load"
            );
            return Ok(false);
        }

        let bitmap = match result {
            Ok(bitmap) => bitmap,
            Err(err) => {
                tracing::warn!("stamp image failed to load: {err}");
                return Err(err);
            }
        };

        let Some(placement) = self.pending.take() else {
            return Ok(false);
        };

        let width = placement.width.unwrap_or(f64::from(bitmap.width()));
        let height = placement.height.unwrap_or(f64::from(bitmap.height()));
        self.stamp.set_image(bitmap);
        self.stamp.draw(
            &mut self.target,
            placement.x,
            placement.y,
            width,
            height,
            true,
        );

        Ok(true)
    }

    /// Remove all rendering from the surface.
    pub fn clear(&mut self) {
        self.target.clear();
    }

    /// The owned render target, for embedding.
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Read access to the stamp for inspection.
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    pub fn interaction(&self) -> Interaction {
        self.state
    }

    pub fn display_map(&self) -> &DisplayMap {
        &self.map
    }

    /// Redraw the stamp at its current rectangle.
    fn redraw_stamp(&mut self, with_handles: bool) {
        let origin = self.stamp.top_left();
        let width = self.stamp.current_width();
        let height = self.stamp.current_height();
        self.stamp
            .draw(&mut self.target, origin.x, origin.y, width, height, with_handles);
    }
}
