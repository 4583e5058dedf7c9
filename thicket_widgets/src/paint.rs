// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style-value to color resolution shared by all node kinds.

use peniko::Color;
use thicket_style::{Shape, Style, StyleError, Value};

/// The shape a color attribute must satisfy: a packed integer, a named or
/// `#`-prefixed string, or a 3/4-component integer tuple.
#[must_use]
pub fn color_shape() -> Shape {
    Shape::Union(vec![
        Shape::Int,
        Shape::Str,
        Shape::uniform_tuple(Shape::Int, 3),
        Shape::uniform_tuple(Shape::Int, 4),
    ])
}

/// Reads a color attribute from `style`, falling back to `default` when the
/// key is absent.
///
/// # Errors
///
/// [`StyleError::TypeMismatch`] against [`color_shape`] when the stored
/// value is not a recognizable color.
pub fn style_color(
    style: &Style,
    key: &str,
    default: impl Into<Value>,
) -> Result<Color, StyleError> {
    let value = style.get(key, default);
    resolve(&value).ok_or_else(|| StyleError::TypeMismatch {
        key: key.to_owned(),
        expected: color_shape(),
        actual: value,
    })
}

/// Resolves a style value to a color, if it is one.
///
/// Accepted forms:
/// - `Value::Int`: `0xRRGGBB` (opaque) when it fits in 24 bits, `0xRRGGBBAA`
///   otherwise,
/// - `Value::Str`: `"#RRGGBB"`, `"#RRGGBBAA"`, or a basic color name,
/// - 3- or 4-element integer lists with components in `0..=255`.
#[must_use]
pub fn resolve(value: &Value) -> Option<Color> {
    match value {
        Value::Int(packed) => packed_color(*packed),
        Value::Str(text) => named_color(text).or_else(|| hex_color(text)),
        Value::List(items) => tuple_color(items),
        _ => None,
    }
}

fn packed_color(packed: i64) -> Option<Color> {
    if !(0..=0xFF_FF_FF_FF).contains(&packed) {
        return None;
    }
    let packed = packed as u32;
    if packed <= 0xFF_FF_FF {
        let [_, r, g, b] = packed.to_be_bytes();
        Some(Color::from_rgb8(r, g, b))
    } else {
        let [r, g, b, a] = packed.to_be_bytes();
        Some(Color::from_rgba8(r, g, b, a))
    }
}

fn hex_color(text: &str) -> Option<Color> {
    let digits = text.strip_prefix('#')?;
    match digits.len() {
        6 => {
            let packed = u32::from_str_radix(digits, 16).ok()?;
            let [_, r, g, b] = packed.to_be_bytes();
            Some(Color::from_rgb8(r, g, b))
        }
        8 => {
            let packed = u32::from_str_radix(digits, 16).ok()?;
            let [r, g, b, a] = packed.to_be_bytes();
            Some(Color::from_rgba8(r, g, b, a))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b, a) = match name {
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 128, 0, 255),
        "lime" => (0, 255, 0, 255),
        "blue" => (0, 0, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "cyan" => (0, 255, 255, 255),
        "magenta" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "brown" => (165, 42, 42, 255),
        "pink" => (255, 192, 203, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "transparent" => (0, 0, 0, 0),
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

fn tuple_color(items: &[Value]) -> Option<Color> {
    if !matches!(items.len(), 3 | 4) {
        return None;
    }
    let mut channels = [255_u8; 4];
    for (slot, item) in channels.iter_mut().zip(items) {
        let component = item.as_i64()?;
        *slot = u8::try_from(component).ok()?;
    }
    let [r, g, b, a] = channels;
    Some(Color::from_rgba8(r, g, b, a))
}

/// Whether a color contributes no pixels when filled.
#[must_use]
pub fn is_fully_transparent(color: Color) -> bool {
    color.components[3] == 0.0
}
