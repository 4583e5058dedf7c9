// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thicket_style::Value;
use thicket_surface::Surface;
use thicket_tree::{Node, RenderError, Visual};

use crate::block::{draw_box, BoxStyle, FillMode};

/// A clickable box: a [`Block`](crate::Block) with defaults tuned for
/// button-like chrome (`color` white, `border_radius` 10).
///
/// The kind draws nothing special for hover or press; applications restyle
/// it from pointer callbacks.
#[derive(Copy, Clone, Debug, Default)]
pub struct Button;

impl<S: Surface> Visual<S> for Button {
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        draw_box(
            node,
            surface,
            BoxStyle {
                fill_default: Value::from((255, 255, 255)),
                radius_default: 10.0,
                fill_mode: FillMode::Always,
            },
        )
    }
}
