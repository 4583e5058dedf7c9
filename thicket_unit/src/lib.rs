// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Unit: viewport- and parent-relative size units.
//!
//! A [`SizeUnit`] is a measurement that resolves to pixels lazily, relative to
//! either the renderer viewport or the owning node's parent. Five variants are
//! supported:
//!
//! - `px` (or no tag): absolute pixels,
//! - `sw` / `sh`: percent of the viewport (surface) width / height,
//! - `pw` / `ph`: percent of the parent's resolved width / height.
//!
//! Units parse from a compact textual spec (`"50pw"`, `"12.5sw"`, `"10px"`,
//! `"10"`) and evaluate against a [`UnitContext`] that carries the viewport
//! size and, when the node has a parent, the parent's resolved size. Nodes
//! without a parent evaluate `pw`/`ph` against the viewport.
//!
//! ```
//! use kurbo::Size;
//! use thicket_unit::{SizeUnit, UnitContext};
//!
//! let unit: SizeUnit = "50pw".parse().unwrap();
//! let ctx = UnitContext {
//!     viewport: Size::new(800.0, 600.0),
//!     parent: Some(Size::new(200.0, 100.0)),
//! };
//! assert_eq!(unit.evaluate(&ctx), 100.0);
//! assert_eq!(unit.to_string(), "50pw");
//! ```

use std::fmt;
use std::str::FromStr;

use kurbo::Size;

/// A measurement expressed in absolute pixels or as a percentage of a
/// reference dimension.
///
/// Percent variants store the *ratio* (parsed value divided by 100);
/// [`SizeUnit::value`] converts back to percent form. `Px` stores raw pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizeUnit {
    /// Absolute pixels.
    Px(f64),
    /// Percent of the viewport width (tag `sw`), stored as a ratio.
    ViewportWidth(f64),
    /// Percent of the viewport height (tag `sh`), stored as a ratio.
    ViewportHeight(f64),
    /// Percent of the parent's resolved width (tag `pw`), stored as a ratio.
    ParentWidth(f64),
    /// Percent of the parent's resolved height (tag `ph`), stored as a ratio.
    ParentHeight(f64),
}

/// Reference dimensions a [`SizeUnit`] evaluates against.
///
/// `parent` is the parent node's resolved size, when one exists. Parent
/// relative units fall back to `viewport` when it is `None`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitContext {
    /// The renderer's composition surface size.
    pub viewport: Size,
    /// The resolved size of the owning node's parent, if any.
    pub parent: Option<Size>,
}

impl SizeUnit {
    /// Absolute pixels.
    #[inline]
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Px(value)
    }

    /// Percent of viewport width, from percent form (`sw(50.0)` is half).
    #[inline]
    #[must_use]
    pub fn sw(percent: f64) -> Self {
        Self::ViewportWidth(percent / 100.0)
    }

    /// Percent of viewport height, from percent form.
    #[inline]
    #[must_use]
    pub fn sh(percent: f64) -> Self {
        Self::ViewportHeight(percent / 100.0)
    }

    /// Percent of parent width, from percent form.
    #[inline]
    #[must_use]
    pub fn pw(percent: f64) -> Self {
        Self::ParentWidth(percent / 100.0)
    }

    /// Percent of parent height, from percent form.
    #[inline]
    #[must_use]
    pub fn ph(percent: f64) -> Self {
        Self::ParentHeight(percent / 100.0)
    }

    /// The magnitude in the form it was written: percent for percent
    /// variants, raw pixels for `Px`.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Px(v) => v,
            Self::ViewportWidth(r)
            | Self::ViewportHeight(r)
            | Self::ParentWidth(r)
            | Self::ParentHeight(r) => r * 100.0,
        }
    }

    /// The textual tag of this unit (`"px"`, `"sw"`, `"sh"`, `"pw"`, `"ph"`).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Px(_) => "px",
            Self::ViewportWidth(_) => "sw",
            Self::ViewportHeight(_) => "sh",
            Self::ParentWidth(_) => "pw",
            Self::ParentHeight(_) => "ph",
        }
    }

    /// Returns `true` for `pw`/`ph`, which need the parent's resolved size.
    #[must_use]
    pub const fn is_parent_relative(&self) -> bool {
        matches!(self, Self::ParentWidth(_) | Self::ParentHeight(_))
    }

    /// Converts this unit to pixels.
    ///
    /// Percent variants multiply the stored ratio by the reference dimension
    /// and round to the nearest integer pixel. Parent-relative variants use
    /// `ctx.parent` when present and fall back to the viewport otherwise.
    /// `Px` passes its raw value through unrounded.
    #[must_use]
    pub fn evaluate(&self, ctx: &UnitContext) -> f64 {
        let parent = ctx.parent.unwrap_or(ctx.viewport);
        match *self {
            Self::Px(v) => v,
            Self::ViewportWidth(r) => (ctx.viewport.width * r).round(),
            Self::ViewportHeight(r) => (ctx.viewport.height * r).round(),
            Self::ParentWidth(r) => (parent.width * r).round(),
            Self::ParentHeight(r) => (parent.height * r).round(),
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.tag())
    }
}

impl From<f64> for SizeUnit {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<i32> for SizeUnit {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Px(f64::from(value))
    }
}

/// Error parsing a textual size-unit spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseUnitError {
    /// The trailing unit tag was not one of `sw`, `sh`, `pw`, `ph`, `px`, or
    /// the empty string.
    UnknownTag {
        /// The full input.
        input: String,
        /// The unrecognized trailing tag.
        tag: String,
    },
    /// The numeric portion was not a valid float literal.
    InvalidNumber {
        /// The full input.
        input: String,
        /// The rejected numeric portion.
        number: String,
    },
}

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { input, tag } => {
                write!(
                    f,
                    "could not convert '{input}' to a size unit: invalid unit tag '{tag}'"
                )
            }
            Self::InvalidNumber { input, number } => {
                write!(
                    f,
                    "could not convert '{input}' to a size unit: '{number}' is not a valid float"
                )
            }
        }
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for SizeUnit {
    type Err = ParseUnitError;

    /// Parses `ws* <float> <tag> ws*`.
    ///
    /// The tag is the literal remainder of the input after the leading run of
    /// whitespace, digits, `.` and `-` characters (trailing whitespace
    /// trimmed). Tag matching is exact: any other remainder is an error, not
    /// fuzz-matched. The numeric portion is the input minus all alphabetic
    /// and `_` characters, trimmed; it must parse as a float on its own, so
    /// internal whitespace (`"1 . 1sh"`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag_start = s
            .char_indices()
            .find(|&(_, c)| !(c.is_whitespace() || c.is_ascii_digit() || c == '.' || c == '-'))
            .map_or(s.len(), |(i, _)| i);
        let tag = s[tag_start..].trim_end();

        let make: fn(f64) -> Self = match tag {
            "" | "px" => Self::Px,
            "sw" => Self::sw,
            "sh" => Self::sh,
            "pw" => Self::pw,
            "ph" => Self::ph,
            _ => {
                return Err(ParseUnitError::UnknownTag {
                    input: s.to_owned(),
                    tag: tag.to_owned(),
                });
            }
        };

        let number: String = s
            .chars()
            .filter(|c| !(c.is_ascii_alphabetic() || *c == '_'))
            .collect();
        let number = number.trim();
        let value: f64 = number.parse().map_err(|_| ParseUnitError::InvalidNumber {
            input: s.to_owned(),
            number: number.to_owned(),
        })?;

        Ok(make(value))
    }
}

/// Conversion into a [`SizeUnit`], fallible for textual specs.
///
/// Node constructors and geometry setters accept `impl IntoSizeUnit`, so
/// positions and sizes can be given as numbers, parsed strings, or unit
/// values interchangeably.
pub trait IntoSizeUnit {
    /// Converts `self` into a unit, parsing if textual.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual spec cannot be parsed.
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError>;
}

impl IntoSizeUnit for SizeUnit {
    #[inline]
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError> {
        Ok(self)
    }
}

impl IntoSizeUnit for f64 {
    #[inline]
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError> {
        Ok(SizeUnit::Px(self))
    }
}

impl IntoSizeUnit for i32 {
    #[inline]
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError> {
        Ok(SizeUnit::Px(f64::from(self)))
    }
}

impl IntoSizeUnit for &str {
    #[inline]
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError> {
        self.parse()
    }
}

impl IntoSizeUnit for String {
    #[inline]
    fn into_unit(self) -> Result<SizeUnit, ParseUnitError> {
        self.parse()
    }
}

/// Conversion of an `(x, y, width, height)` spec into four units.
///
/// Implemented for heterogeneous 4-tuples of [`IntoSizeUnit`] values, so a
/// node rect can be written as `(0, 0, "100sw", 100)`.
pub trait IntoUnitRect {
    /// Converts `self` into `[x, y, width, height]` units.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when any textual component cannot be
    /// parsed.
    fn into_units(self) -> Result<[SizeUnit; 4], ParseUnitError>;
}

impl<X, Y, W, H> IntoUnitRect for (X, Y, W, H)
where
    X: IntoSizeUnit,
    Y: IntoSizeUnit,
    W: IntoSizeUnit,
    H: IntoSizeUnit,
{
    fn into_units(self) -> Result<[SizeUnit; 4], ParseUnitError> {
        Ok([
            self.0.into_unit()?,
            self.1.into_unit()?,
            self.2.into_unit()?,
            self.3.into_unit()?,
        ])
    }
}
