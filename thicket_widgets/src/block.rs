// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plain filled rectangle and the shared box-drawing routine.

use thicket_style::Value;
use thicket_surface::Surface;
use thicket_tree::{Node, RenderError, Visual};

use crate::paint;

/// How [`draw_box`] treats a fully transparent fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FillMode {
    /// Composite the fill even when it contributes nothing.
    Always,
    /// Skip a zero-alpha fill; the border still draws.
    SkipTransparent,
}

pub(crate) struct BoxStyle {
    pub fill_default: Value,
    pub radius_default: f64,
    pub fill_mode: FillMode,
}

/// The box-drawing routine every rectangular kind shares: optional `hidden`
/// gate, rounded fill, then an optional inset border.
pub(crate) fn draw_box<S: Surface>(
    node: &Node<S>,
    surface: &mut S,
    defaults: BoxStyle,
) -> Result<(), RenderError<S::Error>> {
    let style = node.style();
    if style.get_bool("hidden", false)? {
        return Ok(());
    }
    let rect = node.resolve_rect(surface.size());
    let color = paint::style_color(&style, "color", defaults.fill_default)?;
    let radius = style.get_f64("border_radius", defaults.radius_default)?.max(0.0);
    let thickness = style.get_f64("border_thickness", 0.0)?.max(0.0).round();

    if defaults.fill_mode == FillMode::Always || !paint::is_fully_transparent(color) {
        surface.fill_rect(color, rect.to_rounded_rect(radius));
    }
    if thickness > 0.0 {
        let border = paint::style_color(&style, "border_color", 0)?;
        surface.stroke_rect(border, rect.to_rounded_rect(radius), thickness);
    }
    Ok(())
}

/// A filled rectangle.
///
/// Style attributes: `color` (default black), `border_radius`,
/// `border_thickness`, `border_color`, `hidden`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Block;

impl<S: Surface> Visual<S> for Block {
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        draw_box(
            node,
            surface,
            BoxStyle {
                fill_default: Value::Int(0),
                radius_default: 0.0,
                fill_mode: FillMode::Always,
            },
        )
    }
}
