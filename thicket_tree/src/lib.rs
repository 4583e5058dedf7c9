// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Tree: the retained node hierarchy.
//!
//! A [`Node`] is a positioned, styleable element in a retained tree. Nodes
//! carry:
//!
//! - identity: a `name` unique among siblings and a process-unique
//!   [`NodeId`],
//! - geometry: `x`/`y`/`width`/`height` as
//!   [`SizeUnit`](thicket_unit::SizeUnit)s, resolved lazily and
//!   parent-relatively against a viewport size,
//! - a change-tracked [`Style`](thicket_style::Style) handle,
//! - an insertion-ordered child collection and a weak back-reference to the
//!   parent,
//! - a [`Visual`] that turns resolved geometry and style into surface draw
//!   calls, and
//! - pointer-event callback slots fired by the renderer's hover/press state
//!   machines.
//!
//! ## Ownership
//!
//! Parent-to-child is the only owning edge: a node's children live in its
//! child collection, while the child's parent link is a weak handle used for
//! lookup only. Dropping the last external handle to a parent tears down the
//! subtree; children that are independently held survive with their parent
//! link reading `None`. Dropping an external child handle never disturbs the
//! container that owns it.
//!
//! ## Geometry resolution
//!
//! Screen position accumulates: a node's resolved `x`/`y` is its own
//! evaluated offset plus the parent's resolved position, recursively to the
//! root. Width and height evaluate in the node's own reference frame only —
//! a child is no wider than declared just because its parent is wide, unless
//! the width is expressed in `pw`/`ph` units.
//!
//! ```
//! use kurbo::Size;
//! use thicket_tree::Node;
//! # use thicket_tree::doctest_support::NullSurface;
//!
//! let root: Node<NullSurface> = Node::group("root", (10, 0, 300, 200)).unwrap();
//! let child = Node::group("child", (5, 0, "50pw", "50ph")).unwrap();
//! child.join(&root).unwrap();
//!
//! let viewport = Size::new(800.0, 600.0);
//! assert_eq!(child.resolve_x(viewport), 15.0);
//! assert_eq!(child.resolve_width(viewport), 150.0);
//! ```

mod error;
mod events;
mod node;
mod visual;

pub use error::{RenderError, TreeError};
pub use events::PointerEvent;
pub use node::{Node, NodeId};
pub use visual::Visual;

// Minimal surface used by doctests and unit tests; hidden from the public
// API surface.
#[doc(hidden)]
pub mod doctest_support {
    use kurbo::{Point, Rect, RoundedRect, Size};
    use peniko::Color;
    use thicket_surface::Surface;

    /// A surface that swallows every draw call. Test helper only.
    #[derive(Debug)]
    pub struct NullSurface {
        size: Size,
    }

    impl Surface for NullSurface {
        type Error = core::convert::Infallible;

        fn new(size: Size) -> Self {
            Self { size }
        }

        fn size(&self) -> Size {
            self.size
        }

        fn clear(&mut self, _region: Rect) {}

        fn fill_rect(&mut self, _color: Color, _rect: RoundedRect) {}

        fn stroke_rect(&mut self, _color: Color, _rect: RoundedRect, _thickness: f64) {}

        fn render_text(text: &str, size: f64, _color: Color) -> Result<Self, Self::Error> {
            Ok(Self::new(Self::measure_text(text, size)))
        }

        fn measure_text(text: &str, size: f64) -> Size {
            Size::new(text.chars().count() as f64 * size * 0.6, size)
        }

        fn load_image(_path: &str) -> Result<Self, Self::Error> {
            Ok(Self::new(Size::ZERO))
        }

        fn scaled(&self, size: Size) -> Self {
            Self::new(size)
        }

        fn blit(&mut self, _src: &Self, _dest: Point, _src_region: Option<Rect>) {}
    }
}
