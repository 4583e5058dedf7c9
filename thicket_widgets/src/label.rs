// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use thicket_surface::Surface;
use thicket_tree::{Node, RenderError, Visual};

use crate::paint;

/// A single line of text, cropped to the node's rect.
///
/// Style attributes: `text` (empty renders nothing), `text_color` (default
/// white), `text_size` (pixels; negative or absent means the node's resolved
/// height), `align_center`, `hidden`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Label;

impl<S: Surface> Visual<S> for Label {
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        let style = node.style();
        if style.get_bool("hidden", false)? {
            return Ok(());
        }
        let text = style.get_str("text", "")?;
        if text.is_empty() {
            return Ok(());
        }
        let rect = node.resolve_rect(surface.size());
        let color = paint::style_color(&style, "text_color", (255, 255, 255))?;
        let mut size = style.get_f64("text_size", -1.0)?;
        if size < 0.0 {
            size = rect.height().round();
        }

        let rendered = S::render_text(&text, size, color).map_err(RenderError::Surface)?;
        let mut dest = rect.origin();
        if style.get_bool("align_center", false)? {
            dest.x += (rect.width() - rendered.size().width) / 2.0;
        }
        // Crop overflowing text to the node's footprint.
        let mask = Rect::from_origin_size(Point::ZERO, rect.size());
        surface.blit(&rendered, dest, Some(mask));
        Ok(())
    }
}
