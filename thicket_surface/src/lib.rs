// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Surface: the abstract drawing seam.
//!
//! The tree, the renderer, and the visual node kinds never talk to a
//! concrete raster or GPU API; they draw through the [`Surface`] trait. A
//! surface is an offscreen pixel target with a fixed size, transparent
//! clearing, rounded-rect fill and stroke, a minimal text raster, image
//! loading/scaling, and surface-to-surface blits.
//!
//! This mirrors the split in the rest of the stack: presentation crates own
//! structure and state, backends own pixels. The companion `thicket_raster`
//! crate provides a reference CPU implementation used by tests and demos;
//! applications targeting a windowing stack implement `Surface` over their
//! framebuffer of choice.
//!
//! All geometry is kurbo-typed and colors are [`peniko::Color`], so backends
//! can map operations directly onto their native primitives.

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;

/// An offscreen drawing target.
///
/// Implementations are owned buffers: the renderer allocates its composition
/// surface through [`Surface::new`], and text/image operations return new
/// surfaces that are composed back with [`Surface::blit`].
///
/// Coordinates are in pixels with the origin at the top left. Clearing
/// writes fully transparent pixels; fills and blits composite src-over.
pub trait Surface: Sized {
    /// Backend error type, surfaced unchanged through rendering.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Allocates a transparent surface of the given size.
    fn new(size: Size) -> Self;

    /// The surface size in pixels.
    fn size(&self) -> Size;

    /// Clears `region` (clamped to the surface) to transparent.
    fn clear(&mut self, region: Rect);

    /// Clears the whole surface to transparent.
    fn clear_all(&mut self) {
        let size = self.size();
        self.clear(size.to_rect());
    }

    /// Fills a rounded rectangle with `color`, compositing src-over.
    fn fill_rect(&mut self, color: Color, rect: RoundedRect);

    /// Strokes the border of a rounded rectangle with `color`, `thickness`
    /// pixels wide, inset from the rect edge.
    fn stroke_rect(&mut self, color: Color, rect: RoundedRect, thickness: f64);

    /// Rasters `text` at the given pixel size into a new surface.
    ///
    /// The returned surface is tightly sized to the rendered text; callers
    /// position it with [`Surface::blit`].
    ///
    /// # Errors
    ///
    /// Backend-specific failures (e.g. a missing font resource).
    fn render_text(text: &str, size: f64, color: Color) -> Result<Self, Self::Error>;

    /// The size [`Surface::render_text`] would produce for `text`.
    fn measure_text(text: &str, size: f64) -> Size;

    /// Loads an image file into a new surface.
    ///
    /// # Errors
    ///
    /// Backend-specific failures (missing file, unsupported format).
    fn load_image(path: &str) -> Result<Self, Self::Error>;

    /// Returns a copy of this surface scaled to `size`.
    fn scaled(&self, size: Size) -> Self;

    /// Composites `src` onto this surface with its top-left corner at
    /// `dest`, src-over.
    ///
    /// When `src_region` is given, only that region of `src` is copied
    /// (pixel coordinates within `src`); this is how node kinds crop content
    /// to their resolved rect.
    fn blit(&mut self, src: &Self, dest: Point, src_region: Option<Rect>);
}
