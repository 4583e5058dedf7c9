// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thicket_surface::Surface;
use thicket_tree::{Node, RenderError, Visual};

/// An image file scaled into the node's rect.
///
/// Style attributes: `source` (a path; empty renders nothing), `hidden`.
/// The file is loaded through [`Surface::load_image`] on every paint; load
/// failures propagate unchanged, naming the backend condition.
#[derive(Copy, Clone, Debug, Default)]
pub struct Image;

impl<S: Surface> Visual<S> for Image {
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        let style = node.style();
        if style.get_bool("hidden", false)? {
            return Ok(());
        }
        let source = style.get_str("source", "")?;
        if source.is_empty() {
            return Ok(());
        }
        let rect = node.resolve_rect(surface.size());
        let image = S::load_image(&source).map_err(RenderError::Surface)?;
        let scaled = image.scaled(rect.size());
        surface.blit(&scaled, rect.origin(), None);
        Ok(())
    }
}
