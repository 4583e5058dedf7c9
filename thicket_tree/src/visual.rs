// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual seam between the tree and a drawing backend.

use crate::{Node, RenderError};
use thicket_surface::Surface;

/// How a node paints itself.
///
/// A visual is stored boxed inside its node and invoked with a handle to
/// that node, so it can resolve geometry and read style at call time rather
/// than caching either. The `thicket_widgets` crate provides the standard
/// kinds; `()` is the no-op visual used by plain grouping nodes.
pub trait Visual<S: Surface> {
    /// Per-frame hook, called during the tree's update pass.
    ///
    /// Returns `true` when the visual changed something that requires a
    /// repaint. The default does nothing.
    fn update(&mut self, _node: &Node<S>, _dt: f64) -> bool {
        false
    }

    /// Paints the node onto `surface` in resolved screen coordinates.
    ///
    /// # Errors
    ///
    /// [`RenderError::Style`] when a style attribute does not satisfy the
    /// shape the visual expects, [`RenderError::Surface`] on backend
    /// failures.
    fn render(&mut self, node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>>;
}

/// The invisible visual: grouping nodes position children and paint nothing.
impl<S: Surface> Visual<S> for () {
    fn render(&mut self, _node: &Node<S>, _surface: &mut S) -> Result<(), RenderError<S::Error>> {
        Ok(())
    }
}
