// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The straight-alpha RGBA8 pixel buffer.

use std::path::Path;

use kurbo::{Point, Rect, RoundedRect, Shape as _, Size};
use peniko::Color;

use crate::RasterError;
use thicket_surface::Surface;

/// A CPU pixel buffer; see the crate docs for the rendering model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: usize,
    height: usize,
    /// Row-major RGBA8, straight alpha.
    data: Vec<u8>,
}

impl Pixmap {
    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The `[r, g, b, a]` value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of bounds.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Encodes the buffer as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Image`] on encode or I/O failure.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        image::save_buffer(
            path,
            &self.data,
            self.width as u32,
            self.height as u32,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }

    /// Clamps a rect to the buffer and returns integer pixel bounds.
    fn pixel_bounds(&self, region: Rect) -> (usize, usize, usize, usize) {
        let x0 = (region.x0.floor().max(0.0) as usize).min(self.width);
        let y0 = (region.y0.floor().max(0.0) as usize).min(self.height);
        let x1 = (region.x1.ceil().max(0.0) as usize).min(self.width);
        let y1 = (region.y1.ceil().max(0.0) as usize).min(self.height);
        (x0, y0, x1.max(x0), y1.max(y0))
    }

    /// Src-over composites a straight-alpha pixel at `(x, y)`.
    fn blend_pixel(&mut self, x: usize, y: usize, src: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        let sa = u32::from(src[3]);
        if sa == 0 {
            return;
        }
        if sa == 255 {
            self.data[i..i + 4].copy_from_slice(&src);
            return;
        }
        let da = u32::from(self.data[i + 3]);
        // Alphas scaled by 255 to stay in integer math.
        let out_a = sa * 255 + da * (255 - sa);
        for c in 0..3 {
            let sc = u32::from(src[c]);
            let dc = u32::from(self.data[i + c]);
            let num = sc * sa * 255 + dc * da * (255 - sa);
            self.data[i + c] = ((num + out_a / 2) / out_a) as u8;
        }
        self.data[i + 3] = ((out_a + 127) / 255) as u8;
    }

    /// Fills every pixel whose center falls inside `shape` with `color`.
    fn fill_shape(&mut self, color: Color, shape: impl Fn(Point) -> bool, bounds: Rect) {
        let src = rgba8(color);
        let (x0, y0, x1, y1) = self.pixel_bounds(bounds);
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if shape(center) {
                    self.blend_pixel(x, y, src);
                }
            }
        }
    }
}

fn rgba8(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// The inset rounded rect bounding a stroke's inner edge.
fn inner_edge(rect: RoundedRect, thickness: f64) -> RoundedRect {
    let radius = rect.radii().top_left;
    RoundedRect::from_rect(
        rect.rect().inflate(-thickness, -thickness),
        (radius - thickness).max(0.0),
    )
}

impl Surface for Pixmap {
    type Error = RasterError;

    fn new(size: Size) -> Self {
        let width = size.width.round().max(0.0) as usize;
        let height = size.height.round().max(0.0) as usize;
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    fn clear(&mut self, region: Rect) {
        let (x0, y0, x1, y1) = self.pixel_bounds(region);
        for y in y0..y1 {
            let row = (y * self.width + x0) * 4;
            self.data[row..row + (x1 - x0) * 4].fill(0);
        }
    }

    fn fill_rect(&mut self, color: Color, rect: RoundedRect) {
        self.fill_shape(color, |p| rect.contains(p), rect.rect());
    }

    fn stroke_rect(&mut self, color: Color, rect: RoundedRect, thickness: f64) {
        if thickness <= 0.0 {
            return;
        }
        let inner = inner_edge(rect, thickness);
        let hollow = inner.rect().width() > 0.0 && inner.rect().height() > 0.0;
        self.fill_shape(
            color,
            |p| rect.contains(p) && !(hollow && inner.contains(p)),
            rect.rect(),
        );
    }

    fn render_text(text: &str, size: f64, color: Color) -> Result<Self, Self::Error> {
        let mut out = Self::new(Self::measure_text(text, size));
        let advance = size * 0.6;
        // Block glyphs: each cell gets a filled box with a small margin, so
        // adjacent glyphs stay visually separate and spaces stay empty.
        let margin_x = advance * 0.15;
        let margin_y = size * 0.1;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = i as f64 * advance;
            let glyph = Rect::new(
                cell + margin_x,
                margin_y,
                cell + advance - margin_x,
                size - margin_y,
            );
            out.fill_shape(color, |p| glyph.contains(p), glyph);
        }
        Ok(out)
    }

    fn measure_text(text: &str, size: f64) -> Size {
        Size::new(text.chars().count() as f64 * size * 0.6, size)
    }

    fn load_image(path: &str) -> Result<Self, Self::Error> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width: width as usize,
            height: height as usize,
            data: image.into_raw(),
        })
    }

    fn scaled(&self, size: Size) -> Self {
        let mut out = Self::new(size);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..out.height {
            let sy = (y * self.height / out.height.max(1)).min(self.height - 1);
            for x in 0..out.width {
                let sx = (x * self.width / out.width.max(1)).min(self.width - 1);
                let si = (sy * self.width + sx) * 4;
                let di = (y * out.width + x) * 4;
                out.data[di..di + 4].copy_from_slice(&self.data[si..si + 4]);
            }
        }
        out
    }

    fn blit(&mut self, src: &Self, dest: Point, src_region: Option<Rect>) {
        let region = src_region.unwrap_or_else(|| src.size().to_rect());
        let (sx0, sy0, sx1, sy1) = src.pixel_bounds(region);
        let ox = dest.x.round() as i64 - sx0 as i64;
        let oy = dest.y.round() as i64 - sy0 as i64;
        for sy in sy0..sy1 {
            let dy = sy as i64 + oy;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for sx in sx0..sx1 {
                let dx = sx as i64 + ox;
                if dx < 0 || dx >= self.width as i64 {
                    continue;
                }
                let si = (sy * src.width + sx) * 4;
                let pixel = [
                    src.data[si],
                    src.data[si + 1],
                    src.data[si + 2],
                    src.data[si + 3],
                ];
                self.blend_pixel(dx as usize, dy as usize, pixel);
            }
        }
    }
}
