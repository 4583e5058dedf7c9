// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Style: a mutation-tracked store of visual attributes.
//!
//! A [`Style`] is an insertion-ordered `key -> value` mapping shared by a
//! node and anything that holds a handle to it (handles are cheap `Rc`
//! clones). Values are tagged [`Value`]s; reads can be checked against a
//! structural [`Shape`] descriptor, which stands in for the open-ended
//! runtime type checks a dynamic language would do.
//!
//! Every write is change-tracked: the first *real* change to a key since the
//! last [`Style::poll_changes`] records that key's pre-write value. Nodes
//! poll their style once per frame and use a non-empty result as their
//! dirtiness signal, so redraw work only happens for styles that actually
//! changed.
//!
//! ```
//! use thicket_style::Style;
//!
//! let style = Style::new();
//! style.set("color", 0xFF0000);
//! style.set("hidden", false);
//!
//! assert_eq!(style.get_bool("hidden", true).unwrap(), false);
//! assert_eq!(style.poll_changes().len(), 2);
//! // Nothing changed since the poll.
//! assert!(style.poll_changes().is_empty());
//! ```

mod shape;
mod store;
mod value;

pub use shape::Shape;
pub use store::{ChangeSet, Style, StyleError};
pub use value::Value;
