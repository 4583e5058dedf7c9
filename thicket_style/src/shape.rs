// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural type descriptors for style values.

use std::fmt;

use crate::Value;

/// A closed structural descriptor a [`Value`] can be checked against.
///
/// Shapes replace the arbitrary runtime type expressions a dynamic language
/// would pass to a style getter: primitive kinds, fixed-length tuples,
/// homogeneous sequences, and unions thereof. Matching is purely structural;
/// no coercion happens (`Int` does not match [`Shape::Float`] — use
/// [`Shape::number`] where either is acceptable).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A boolean.
    Bool,
    /// An integer.
    Int,
    /// A float.
    Float,
    /// A string.
    Str,
    /// A fixed-length list matched element-wise by position.
    Tuple(Vec<Shape>),
    /// A list of any length whose elements all match the inner shape.
    Seq(Box<Shape>),
    /// Any of the alternatives.
    Union(Vec<Shape>),
}

impl Shape {
    /// `Int | Float`, the usual descriptor for numeric attributes.
    #[must_use]
    pub fn number() -> Self {
        Self::Union(vec![Self::Int, Self::Float])
    }

    /// A fixed-length tuple of `n` copies of `inner`.
    #[must_use]
    pub fn uniform_tuple(inner: Self, n: usize) -> Self {
        Self::Tuple(vec![inner; n])
    }

    /// Returns `true` if `value` structurally satisfies this shape.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::Str, Value::Str(_)) => true,
            (Self::Tuple(shapes), Value::List(items)) => {
                shapes.len() == items.len()
                    && shapes.iter().zip(items).all(|(s, v)| s.matches(v))
            }
            (Self::Seq(inner), Value::List(items)) => items.iter().all(|v| inner.matches(v)),
            (Self::Union(alts), v) => alts.iter().any(|s| s.matches(v)),
            _ => false,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
            Self::Tuple(shapes) => {
                write!(f, "(")?;
                for (i, s) in shapes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{s}")?;
                }
                write!(f, ")")
            }
            Self::Seq(inner) => write!(f, "[{inner}]"),
            Self::Union(alts) => {
                for (i, s) in alts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{s}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_match_exactly() {
        assert!(Shape::Bool.matches(&Value::Bool(true)));
        assert!(!Shape::Bool.matches(&Value::Int(1)));
        assert!(Shape::Int.matches(&Value::Int(1)));
        assert!(!Shape::Int.matches(&Value::Float(1.0)));
    }

    #[test]
    fn number_union_accepts_both() {
        assert!(Shape::number().matches(&Value::Int(1)));
        assert!(Shape::number().matches(&Value::Float(1.0)));
        assert!(!Shape::number().matches(&Value::Str("1".to_owned())));
    }

    #[test]
    fn tuple_matches_by_position() {
        let rgb = Shape::uniform_tuple(Shape::Int, 3);
        assert!(rgb.matches(&Value::from((255, 0, 0))));
        // Length mismatch.
        assert!(!rgb.matches(&Value::from((255, 0, 0, 255))));
        // A 3-tuple of bools is not a 3-tuple of ints.
        let bools = Value::List(vec![
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(true),
        ]);
        assert!(!rgb.matches(&bools));
    }

    #[test]
    fn seq_requires_homogeneous_elements() {
        let ints = Shape::Seq(Box::new(Shape::Int));
        assert!(ints.matches(&Value::List(vec![Value::Int(1), Value::Int(2)])));
        assert!(ints.matches(&Value::List(vec![])));
        assert!(!ints.matches(&Value::List(vec![Value::Int(1), Value::Bool(true)])));
    }

    #[test]
    fn display_reads_like_a_type() {
        assert_eq!(Shape::number().to_string(), "int | float");
        assert_eq!(Shape::uniform_tuple(Shape::Int, 3).to_string(), "(int, int, int)");
        assert_eq!(Shape::Seq(Box::new(Shape::Str)).to_string(), "[str]");
    }
}
