// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thicket_style::Value;
use thicket_surface::Surface;
use thicket_tree::{Node, RenderError, Visual};

use crate::block::{draw_box, BoxStyle, FillMode};

/// A bordered container: transparent by default, and a fully transparent
/// fill is skipped entirely so the frame costs nothing when it only exists
/// to group and outline children.
#[derive(Copy, Clone, Debug, Default)]
pub struct Frame;

impl<S: Surface> Visual<S> for Frame {
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        draw_box(
            node,
            surface,
            BoxStyle {
                fill_default: Value::from((0, 0, 0, 0)),
                radius_default: 0.0,
                fill_mode: FillMode::SkipTransparent,
            },
        )
    }
}
