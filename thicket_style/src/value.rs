// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged style values.

use std::fmt;

/// A tagged style value.
///
/// This is the closed set of runtime shapes a style can hold: primitives
/// plus nested lists. Lists double as tuples (heterogeneous, fixed length,
/// e.g. an `(r, g, b)` color literal) and as homogeneous sequences; the
/// distinction lives in the [`Shape`](crate::Shape) a reader checks against,
/// not in the value itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A string.
    Str(String),
    /// A list of nested values.
    List(Vec<Value>),
}

impl Value {
    /// Returns the boolean payload, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a float, coercing `Int` losslessly for small magnitudes.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// A short name for the value's runtime shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

/// Color-literal sugar: `(r, g, b)` becomes a list of three ints.
impl From<(u8, u8, u8)> for Value {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::List(vec![
            Self::Int(i64::from(r)),
            Self::Int(i64::from(g)),
            Self::Int(i64::from(b)),
        ])
    }
}

/// Color-literal sugar: `(r, g, b, a)` becomes a list of four ints.
impl From<(u8, u8, u8, u8)> for Value {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::List(vec![
            Self::Int(i64::from(r)),
            Self::Int(i64::from(g)),
            Self::Int(i64::from(b)),
            Self::Int(i64::from(a)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_tag_correctly() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7), Value::Int(7));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("red"), Value::Str("red".to_owned()));
        assert_eq!(
            Value::from((255, 0, 0)),
            Value::List(vec![Value::Int(255), Value::Int(0), Value::Int(0)])
        );
    }

    #[test]
    fn as_f64_coerces_ints() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Bool(true).as_f64(), None);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Value::from((1, 2, 3)).to_string(), "(1, 2, 3)");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }
}
