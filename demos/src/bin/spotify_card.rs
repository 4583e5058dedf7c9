// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless playlist-card scene: a hoverable card with cover art, a play
//! button that appears on hover and grows under the pointer, and text
//! labels. The cover art is generated on the fly, saved as a PNG, and loaded
//! back through the image node kind.

use std::error::Error;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use thicket_raster::Pixmap;
use thicket_surface::Surface as _;
use thicket_tree::Node;
use thicket_view::{PointerState, Renderer};
use thicket_widgets::{Button, Frame, Image, Label};

const CARD_NORMAL: (u8, u8, u8) = (20, 20, 20);
const CARD_HOVER: (u8, u8, u8) = (34, 34, 34);
const PLAY: (u8, u8, u8) = (30, 215, 96);
const PLAY_HOVER: (u8, u8, u8) = (40, 225, 106);

/// Paints a stand-in cover: four colored quadrants.
fn cover_art(path: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let mut art = Pixmap::new(Size::new(128.0, 128.0));
    let quads = [
        (Rect::new(0.0, 0.0, 64.0, 64.0), Color::from_rgb8(64, 160, 160)),
        (Rect::new(64.0, 0.0, 128.0, 64.0), Color::from_rgb8(144, 80, 144)),
        (Rect::new(0.0, 64.0, 64.0, 128.0), Color::from_rgb8(208, 176, 80)),
        (Rect::new(64.0, 64.0, 128.0, 128.0), Color::from_rgb8(96, 104, 128)),
    ];
    for (rect, color) in quads {
        art.fill_rect(color, rect.to_rounded_rect(0.0));
    }
    art.save_png(path)?;
    Ok(())
}

fn build_card(cover: &str) -> Result<Node<Pixmap>, Box<dyn Error>> {
    let card = Node::new("card", (100, 150, 300, 400), Button)?;
    card.style().set("color", CARD_NORMAL);
    card.style().set("border_radius", 10);
    card.on_mouse_enter(|node| {
        node.style().set("color", CARD_HOVER);
        if let Ok(play) = node.child("content").and_then(|c| c.child("cover")).and_then(|c| c.child("play")) {
            play.style().set("hidden", false);
        }
    });
    card.on_mouse_leave(|node| {
        node.style().set("color", CARD_NORMAL);
        if let Ok(play) = node.child("content").and_then(|c| c.child("cover")).and_then(|c| c.child("play")) {
            play.style().set("hidden", true);
        }
    });

    let content = Node::new("content", ("7pw", "6ph", "85pw", "88ph"), Frame)?;
    content.join(&card)?;

    let cover_node = Node::new("cover", (0, 0, "100pw", "100pw"), Image)?;
    cover_node.style().set("source", cover);
    cover_node.join(&content)?;

    let play = Node::new("play", ("70pw", "70ph", 70, 70), Button)?;
    play.style().set("color", PLAY);
    play.style().set("border_radius", 70);
    play.style().set("hidden", true);
    play.on_mouse_enter(|node| {
        node.style().set("color", PLAY_HOVER);
        let _ = node.set_width(74);
        let _ = node.set_height(74);
    });
    play.on_mouse_leave(|node| {
        node.style().set("color", PLAY);
        let _ = node.set_width(70);
        let _ = node.set_height(70);
    });
    play.on_mouse_click(|_| log::info!("play button pressed"));
    play.join(&cover_node)?;

    let name = Node::new("name", (0, "110pw", "100pw", 24), Label)?;
    name.style().set("text", "Liked Songs");
    name.join(&content)?;

    let desc = Node::new("desc", (0, "123pw", "100pw", 32), Label)?;
    desc.style().set("text", "274 songs");
    desc.style().set("text_size", 18);
    desc.style().set("text_color", (120, 120, 120));
    desc.join(&content)?;

    Ok(card)
}

fn build_header() -> Result<Node<Pixmap>, Box<dyn Error>> {
    let header = Node::new("header", (0, 0, "100sw", 100), Frame)?;
    header.style().set("color", "black");

    let label = Node::new("header_label", (40, 40, "100pw", 40), Label)?;
    label.style().set("text", "Your Library");
    label.join(&header)?;
    Ok(header)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cover_path = std::env::temp_dir().join("thicket_cover_art.png");
    cover_art(&cover_path)?;
    let cover = cover_path.to_str().ok_or("temp path is not valid UTF-8")?;

    let size = Size::new(500.0, 650.0);
    let layout = vec![build_header()?, build_card(cover)?];
    let mut renderer = Renderer::new(size, layout);
    let mut screen = Pixmap::new(size);

    // Drift onto the card (the play button pops in), onto the play button
    // (it grows), click it, then leave.
    let frames = [
        PointerState::hover((20.0, 20.0)),
        PointerState::hover((250.0, 300.0)),
        PointerState::hover((320.0, 380.0)),
        PointerState::press((320.0, 380.0)),
        PointerState::hover((20.0, 600.0)),
    ];
    for pointer in frames {
        renderer.update(16.0, &pointer);
        renderer.render(&mut screen, Point::ZERO)?;
    }

    let out = std::env::temp_dir().join("thicket_spotify_card.png");
    screen.save_png(&out)?;
    log::info!("wrote {}", out.display());
    std::fs::remove_file(&cover_path).ok();
    Ok(())
}
