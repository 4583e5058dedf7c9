// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Widgets: the standard visual node kinds.
//!
//! Each kind is a stateless [`Visual`](thicket_tree::Visual) reading its
//! appearance from the node's style store at paint time:
//!
//! - [`Block`] — a filled rectangle,
//! - [`Button`] — a block with button-ish defaults (white, rounded),
//! - [`Frame`] — a transparent-by-default bordered container,
//! - [`Label`] — a line of text cropped to the node rect,
//! - [`Image`] — an image file scaled into the node rect.
//!
//! All kinds honor the `hidden` attribute and read colors through the
//! [`paint`] module, which accepts packed integers, hex or named strings,
//! and integer tuples. A malformed attribute fails the paint with a
//! [`StyleError`](thicket_style::StyleError) naming the key and expected
//! shape; nothing is silently coerced.
//!
//! Kinds deliberately keep no per-widget state (hover highlights and the
//! like are the application's style writes), which is what lets them be
//! plain unit structs shared freely across trees.

mod block;
mod button;
mod frame;
mod image;
mod label;
pub mod paint;

pub use block::Block;
pub use button::Button;
pub use frame::Frame;
pub use image::Image;
pub use label::Label;

#[cfg(test)]
mod tests {
    use super::*;

    use kurbo::{Point, Rect, RoundedRect, Size};
    use peniko::Color;
    use thicket_style::StyleError;
    use thicket_surface::Surface;
    use thicket_tree::{Node, RenderError, Visual};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill(Color, RoundedRect),
        Stroke(Color, RoundedRect, f64),
        Blit {
            dest: Point,
            src_size: Size,
            src_region: Option<Rect>,
        },
    }

    /// Records draw calls; `load_image("missing.png")` fails on purpose.
    #[derive(Debug)]
    struct RecordingSurface {
        size: Size,
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        type Error = String;

        fn new(size: Size) -> Self {
            Self {
                size,
                ops: Vec::new(),
            }
        }

        fn size(&self) -> Size {
            self.size
        }

        fn clear(&mut self, _region: Rect) {}

        fn fill_rect(&mut self, color: Color, rect: RoundedRect) {
            self.ops.push(Op::Fill(color, rect));
        }

        fn stroke_rect(&mut self, color: Color, rect: RoundedRect, thickness: f64) {
            self.ops.push(Op::Stroke(color, rect, thickness));
        }

        fn render_text(text: &str, size: f64, _color: Color) -> Result<Self, Self::Error> {
            Ok(Self::new(Self::measure_text(text, size)))
        }

        fn measure_text(text: &str, size: f64) -> Size {
            Size::new(text.chars().count() as f64 * size * 0.6, size)
        }

        fn load_image(path: &str) -> Result<Self, Self::Error> {
            if path == "missing.png" {
                return Err(format!("no such file: {path}"));
            }
            Ok(Self::new(Size::new(64.0, 64.0)))
        }

        fn scaled(&self, size: Size) -> Self {
            Self::new(size)
        }

        fn blit(&mut self, src: &Self, dest: Point, src_region: Option<Rect>) {
            self.ops.push(Op::Blit {
                dest,
                src_size: src.size,
                src_region,
            });
        }
    }

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn paint_node(
        visual: &mut impl Visual<RecordingSurface>,
        node: &Node<RecordingSurface>,
    ) -> Result<Vec<Op>, RenderError<String>> {
        let mut surface = RecordingSurface::new(VIEWPORT);
        visual.render(node, &mut surface)?;
        Ok(surface.ops)
    }

    fn node(rect: (i32, i32, i32, i32)) -> Node<RecordingSurface> {
        Node::group("node", rect).unwrap()
    }

    #[test]
    fn block_fills_black_and_square_by_default() {
        let node = node((10, 10, 100, 50));
        let ops = paint_node(&mut Block, &node).unwrap();
        assert_eq!(
            ops,
            [Op::Fill(
                Color::from_rgb8(0, 0, 0),
                Rect::new(10.0, 10.0, 110.0, 60.0).to_rounded_rect(0.0),
            )]
        );
    }

    #[test]
    fn block_draws_a_border_only_when_thick() {
        let node = node((0, 0, 20, 20));
        node.style().set("color", 0x336699);
        node.style().set("border_thickness", 2);
        node.style().set("border_color", (255, 0, 0));
        let ops = paint_node(&mut Block, &node).unwrap();
        let rounded = Rect::new(0.0, 0.0, 20.0, 20.0).to_rounded_rect(0.0);
        assert_eq!(
            ops,
            [
                Op::Fill(Color::from_rgb8(0x33, 0x66, 0x99), rounded),
                Op::Stroke(Color::from_rgb8(255, 0, 0), rounded, 2.0),
            ]
        );
    }

    #[test]
    fn hidden_nodes_paint_nothing() {
        let node = node((0, 0, 20, 20));
        node.style().set("hidden", true);
        assert!(paint_node(&mut Block, &node).unwrap().is_empty());
        assert!(paint_node(&mut Button, &node).unwrap().is_empty());
        assert!(paint_node(&mut Frame, &node).unwrap().is_empty());
        assert!(paint_node(&mut Label, &node).unwrap().is_empty());
        assert!(paint_node(&mut Image, &node).unwrap().is_empty());
    }

    #[test]
    fn a_malformed_color_fails_the_paint() {
        let node = node((0, 0, 20, 20));
        node.style().set("color", true);
        let err = paint_node(&mut Block, &node).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Style(StyleError::TypeMismatch { ref key, .. }) if key == "color"
        ));
    }

    #[test]
    fn negative_radius_clamps_to_square() {
        let node = node((0, 0, 20, 20));
        node.style().set("border_radius", -5);
        let ops = paint_node(&mut Block, &node).unwrap();
        assert_eq!(
            ops,
            [Op::Fill(
                Color::from_rgb8(0, 0, 0),
                Rect::new(0.0, 0.0, 20.0, 20.0).to_rounded_rect(0.0),
            )]
        );
    }

    #[test]
    fn button_defaults_to_white_with_rounded_corners() {
        let node = node((0, 0, 40, 20));
        let ops = paint_node(&mut Button, &node).unwrap();
        assert_eq!(
            ops,
            [Op::Fill(
                Color::from_rgb8(255, 255, 255),
                Rect::new(0.0, 0.0, 40.0, 20.0).to_rounded_rect(10.0),
            )]
        );
    }

    #[test]
    fn frame_skips_its_transparent_fill_but_keeps_the_border() {
        let node = node((0, 0, 30, 30));
        node.style().set("border_thickness", 1);
        node.style().set("border_color", "white");
        let ops = paint_node(&mut Frame, &node).unwrap();
        assert_eq!(
            ops,
            [Op::Stroke(
                Color::from_rgb8(255, 255, 255),
                Rect::new(0.0, 0.0, 30.0, 30.0).to_rounded_rect(0.0),
                1.0,
            )]
        );

        // An explicit fill paints normally.
        node.style().set("color", "#10203040");
        let ops = paint_node(&mut Frame, &node).unwrap();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], Op::Fill(..)));
    }

    #[test]
    fn label_without_text_renders_nothing() {
        let node = node((0, 0, 100, 20));
        assert!(paint_node(&mut Label, &node).unwrap().is_empty());
    }

    #[test]
    fn label_sizes_to_the_node_height_and_crops() {
        let node = node((10, 10, 50, 20));
        node.style().set("text", "hello");
        let ops = paint_node(&mut Label, &node).unwrap();
        // 5 chars at size 20 measure 60x20; the mask crops to 50x20.
        assert_eq!(
            ops,
            [Op::Blit {
                dest: Point::new(10.0, 10.0),
                src_size: Size::new(60.0, 20.0),
                src_region: Some(Rect::new(0.0, 0.0, 50.0, 20.0)),
            }]
        );
    }

    #[test]
    fn label_centers_when_asked() {
        let node = node((0, 0, 100, 10));
        node.style().set("text", "hi");
        node.style().set("align_center", true);
        let ops = paint_node(&mut Label, &node).unwrap();
        // 2 chars at size 10 measure 12 wide; centered in 100.
        assert_eq!(
            ops,
            [Op::Blit {
                dest: Point::new(44.0, 0.0),
                src_size: Size::new(12.0, 10.0),
                src_region: Some(Rect::new(0.0, 0.0, 100.0, 10.0)),
            }]
        );
    }

    #[test]
    fn label_honors_an_explicit_text_size() {
        let node = node((0, 0, 100, 20));
        node.style().set("text", "a");
        node.style().set("text_size", 8);
        let ops = paint_node(&mut Label, &node).unwrap();
        match &ops[0] {
            Op::Blit { src_size, .. } => assert_eq!(*src_size, Size::new(4.8, 8.0)),
            other => panic!("unexpected op: {other:?}"),
        }
    }

    #[test]
    fn image_scales_the_source_into_the_rect() {
        let node = node((5, 5, 30, 40));
        node.style().set("source", "logo.png");
        let ops = paint_node(&mut Image, &node).unwrap();
        assert_eq!(
            ops,
            [Op::Blit {
                dest: Point::new(5.0, 5.0),
                src_size: Size::new(30.0, 40.0),
                src_region: None,
            }]
        );
    }

    #[test]
    fn image_without_a_source_renders_nothing() {
        let node = node((0, 0, 30, 40));
        assert!(paint_node(&mut Image, &node).unwrap().is_empty());
    }

    #[test]
    fn image_load_failures_propagate_unchanged() {
        let node = node((0, 0, 30, 40));
        node.style().set("source", "missing.png");
        let err = paint_node(&mut Image, &node).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Surface(ref message) if message == "no such file: missing.png"
        ));
    }
}
