// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket View: the frame-driven renderer.
//!
//! A [`Renderer`] owns a composition surface and a list of root nodes (the
//! layout). Applications drive it with two calls per frame:
//!
//! 1. [`Renderer::update`] — synthesizes pointer events from a sampled
//!    [`PointerState`], runs every root's update pass, and records which
//!    roots need repainting.
//! 2. [`Renderer::render`] — repaints dirty roots onto the composition
//!    surface (clearing the pixels they previously occupied first), then
//!    blits the whole composition onto a destination surface.
//!
//! Dirty tracking is root-granular: any change inside a root repaints that
//! entire root and nothing else. The renderer never clips children to their
//! parents, matching the tree's unclipped geometry model.
//!
//! ## Pointer events
//!
//! Hover and press state live in the renderer, keyed by
//! [`NodeId`](thicket_tree::NodeId), not in the nodes. Per node and frame:
//!
//! - pointer inside the resolved rect fires `Enter` on the transition and
//!   `Over` every frame while inside; leaving fires `Leave`,
//! - primary button held while inside fires `Click` once on the press-down
//!   edge, `Down` every held frame, and `Up` on release.
//!
//! Nodes detached between frames are pruned from both sets without
//! synthesizing farewell events.

mod pointer;
mod renderer;

pub use pointer::{PointerButtons, PointerState};
pub use renderer::Renderer;
