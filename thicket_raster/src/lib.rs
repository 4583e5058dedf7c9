// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Raster: a reference CPU implementation of the drawing seam.
//!
//! [`Pixmap`] is a straight-alpha RGBA8 buffer implementing
//! [`Surface`](thicket_surface::Surface) with plain per-pixel math: src-over
//! compositing for fills and blits, rounded corners by point containment,
//! strokes as the difference of an outer and an inset rounded rect, and
//! nearest-neighbor scaling. PNG decode and encode go through the `image`
//! crate.
//!
//! Text is a deliberate placeholder: glyphs raster as filled blocks with
//! fixed metrics (advance 0.6 × size), so labels occupy measurable,
//! croppable space without pulling in a font stack. Applications that need
//! real text bring their own `Surface` backend.
//!
//! This crate exists for tests and headless demos; nothing in it is tuned
//! for speed.

mod error;
mod pixmap;

pub use error::RasterError;
pub use pixmap::Pixmap;
