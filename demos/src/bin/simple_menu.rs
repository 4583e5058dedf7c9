// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless menu scene: three buttons that restyle on hover, driven by a
//! scripted pointer, rendered frame by frame into a pixmap and saved as a
//! PNG next to the system temp directory.

use std::error::Error;

use kurbo::{Point, Size};
use thicket_raster::Pixmap;
use thicket_surface::Surface as _;
use thicket_tree::Node;
use thicket_view::{PointerState, Renderer};
use thicket_widgets::{Block, Button, Label};

const IDLE: (u8, u8, u8) = (36, 36, 48);
const HOT: (u8, u8, u8) = (64, 64, 88);

fn build_menu() -> Result<Node<Pixmap>, Box<dyn Error>> {
    let backdrop = Node::new("backdrop", (0, 0, "100sw", "100sh"), Block)?;
    backdrop.style().set("color", 0x14_14_1C);

    let title = Node::new("title", ("10sw", 40, "80sw", 36), Label)?;
    title.style().set("text", "Main Menu");
    title.style().set("align_center", true);
    title.join(&backdrop)?;

    for (i, name) in ["play", "options", "quit"].iter().enumerate() {
        let button = Node::new(*name, ("20sw", 120 + i as i32 * 70, "60sw", 50), Button)?;
        button.style().set("color", IDLE);
        button.style().set("border_radius", 8);
        button.on_mouse_enter(|node| node.style().set("color", HOT));
        button.on_mouse_leave(|node| node.style().set("color", IDLE));
        button.on_mouse_click(|node| log::info!("'{}' pressed", node.name()));
        button.join(&backdrop)?;
    }
    Ok(backdrop)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let size = Size::new(400.0, 600.0);
    let mut renderer = Renderer::new(size, vec![build_menu()?]);
    let mut screen = Pixmap::new(size);

    // A scripted pointer session: drift over the middle button, click it,
    // then wander off.
    let frames = [
        PointerState::hover((10.0, 10.0)),
        PointerState::hover((200.0, 215.0)),
        PointerState::press((200.0, 215.0)),
        PointerState::hover((200.0, 215.0)),
        PointerState::hover((10.0, 580.0)),
    ];
    for pointer in frames {
        renderer.update(16.0, &pointer);
        renderer.render(&mut screen, Point::ZERO)?;
    }

    let out = std::env::temp_dir().join("thicket_simple_menu.png");
    screen.save_png(&out)?;
    log::info!("wrote {}", out.display());
    Ok(())
}
