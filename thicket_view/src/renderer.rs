// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame renderer and its hover/press state machines.

use std::fmt;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Size};

use crate::PointerState;
use thicket_surface::Surface;
use thicket_tree::{Node, NodeId, PointerEvent, RenderError};

/// A frame-driven renderer over a list of root nodes.
///
/// See the crate docs for the update/render cycle and the pointer-event
/// contract. All state the renderer keeps about nodes is keyed by
/// [`NodeId`], so detaching and dropping nodes between frames is always
/// safe.
pub struct Renderer<S: Surface> {
    surface: S,
    layout: Vec<Node<S>>,
    /// Roots needing a repaint.
    dirty: HashSet<NodeId>,
    /// Last painted rect per root, cleared before its next repaint.
    footprints: HashMap<NodeId, Rect>,
    hovered: HashSet<NodeId>,
    pressed: HashSet<NodeId>,
    /// Ids visited by the current dispatch pass; prunes stale state.
    visited: HashSet<NodeId>,
}

impl<S: Surface> Renderer<S> {
    /// Creates a renderer with a composition surface of `size`.
    ///
    /// Every root starts dirty, so the first [`Renderer::render`] paints the
    /// whole layout.
    #[must_use]
    pub fn new(size: Size, layout: Vec<Node<S>>) -> Self {
        let dirty = layout.iter().map(Node::id).collect();
        Self {
            surface: S::new(size),
            layout,
            dirty,
            footprints: HashMap::new(),
            hovered: HashSet::new(),
            pressed: HashSet::new(),
            visited: HashSet::new(),
        }
    }

    /// The composition surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The root nodes, in paint order.
    #[must_use]
    pub fn layout(&self) -> &[Node<S>] {
        &self.layout
    }

    /// The composition surface size; the viewport all units resolve
    /// against.
    #[must_use]
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// Reallocates the composition surface at `size` and schedules a full
    /// repaint.
    pub fn resize(&mut self, size: Size) {
        log::debug!("renderer resized to {}x{}", size.width, size.height);
        self.surface = S::new(size);
        self.footprints.clear();
        self.dirty = self.layout.iter().map(Node::id).collect();
    }

    /// Runs one frame's update pass.
    ///
    /// Dispatches pointer events synthesized from `pointer` over every root
    /// subtree, then runs the tree update pass with `dt` (milliseconds since
    /// the previous frame). Roots reporting a change are recorded for the
    /// next [`Renderer::render`].
    pub fn update(&mut self, dt: f64, pointer: &PointerState) {
        let viewport = self.size();
        let roots: Vec<Node<S>> = self.layout.clone();

        self.visited.clear();
        for root in &roots {
            self.dispatch_pointer(root, pointer, viewport);
        }
        // Nodes detached since the last frame were never visited; forget
        // them without synthesizing farewell events.
        let visited = &self.visited;
        self.hovered.retain(|id| visited.contains(id));
        self.pressed.retain(|id| visited.contains(id));

        for root in &roots {
            if root.update(dt) {
                self.dirty.insert(root.id());
            }
        }
    }

    /// Synthesizes pointer events for `node`, then its children, unclipped.
    fn dispatch_pointer(&mut self, node: &Node<S>, pointer: &PointerState, viewport: Size) {
        let id = node.id();
        self.visited.insert(id);
        let inside = node.resolve_rect(viewport).contains(pointer.position);

        if inside {
            if self.hovered.insert(id) {
                node.emit(PointerEvent::Enter);
            }
            node.emit(PointerEvent::Over);
        } else if self.hovered.remove(&id) {
            node.emit(PointerEvent::Leave);
        }

        if inside && pointer.primary() {
            if self.pressed.insert(id) {
                node.emit(PointerEvent::Click);
            }
            node.emit(PointerEvent::Down);
        } else if self.pressed.remove(&id) {
            node.emit(PointerEvent::Up);
        }

        for child in node.children() {
            self.dispatch_pointer(&child, pointer, viewport);
        }
    }

    /// Repaints dirty roots, then blits the composition onto `dest` at
    /// `offset`.
    ///
    /// Each dirty root's previously painted footprint is cleared before its
    /// subtree renders, so a root that moved or shrank leaves no stale
    /// pixels behind. Per-node dirty flags are cleared as the cascade paints them.
    ///
    /// # Errors
    ///
    /// Propagates the first visual failure unchanged; dirty state is left in
    /// place so a recovered caller repaints on the next frame.
    pub fn render(&mut self, dest: &mut S, offset: Point) -> Result<(), RenderError<S::Error>> {
        let viewport = self.size();
        if !self.dirty.is_empty() {
            log::trace!("repainting {} dirty roots", self.dirty.len());
        }
        let roots: Vec<Node<S>> = self.layout.clone();
        for root in &roots {
            if !self.dirty.contains(&root.id()) {
                continue;
            }
            if let Some(footprint) = self.footprints.get(&root.id()) {
                self.surface.clear(*footprint);
            }
            let rect = root.resolve_rect(viewport);
            self.surface.clear(rect);
            render_cascade(root, &mut self.surface)?;
            self.footprints.insert(root.id(), rect);
        }
        self.dirty.clear();
        dest.blit(&self.surface, offset, None);
        Ok(())
    }
}

/// Depth-first paint: the node, then its children in insertion order.
fn render_cascade<S: Surface>(node: &Node<S>, surface: &mut S) -> Result<(), RenderError<S::Error>> {
    node.render(surface)?;
    node.clear_dirty();
    for child in node.children() {
        render_cascade(&child, surface)?;
    }
    Ok(())
}

impl<S: Surface> fmt::Debug for Renderer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("size", &self.size())
            .field("roots", &self.layout.len())
            .field("dirty", &self.dirty.len())
            .field("hovered", &self.hovered.len())
            .field("pressed", &self.pressed.len())
            .finish_non_exhaustive()
    }
}
