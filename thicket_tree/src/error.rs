// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tree mutation and rendering.

use std::fmt;

use thicket_style::StyleError;

/// Error mutating the node hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The child is already attached (possibly to the would-be parent
    /// itself, or the child *is* the parent).
    ParentConflict {
        /// Name of the child that could not be adopted.
        child: String,
        /// Name of the parent that refused it.
        parent: String,
    },
    /// A sibling with the same name already exists.
    NameConflict {
        /// Name of the parent holding the clashing sibling.
        parent: String,
        /// The contested name.
        name: String,
    },
    /// No child with the given name.
    NotFound {
        /// Name of the parent that was searched.
        parent: String,
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentConflict { child, parent } => {
                write!(f, "node '{child}' already has a parent, cannot join '{parent}'")
            }
            Self::NameConflict { parent, name } => {
                write!(f, "node '{parent}' already has a child named '{name}'")
            }
            Self::NotFound { parent, name } => {
                write!(f, "node '{parent}' has no child named '{name}'")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Error produced while rendering a node.
///
/// Rendering has exactly two failure sources: a style read that does not
/// satisfy its shape, and a surface primitive reported by the backend. Both
/// are propagated unchanged, so a `Debug` print of the error names the
/// offending style key or backend condition directly.
#[derive(Debug)]
pub enum RenderError<E> {
    /// A style attribute was missing or malformed.
    Style(StyleError),
    /// The surface backend failed.
    Surface(E),
}

impl<E> From<StyleError> for RenderError<E> {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

impl<E: fmt::Display> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(err) => write!(f, "style error: {err}"),
            Self::Surface(err) => write!(f, "surface error: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for RenderError<E> {}
