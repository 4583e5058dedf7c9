// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained node and its hierarchy operations.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::events::Callbacks;
use crate::{PointerEvent, RenderError, TreeError, Visual};
use thicket_style::Style;
use thicket_surface::Surface;
use thicket_unit::{IntoSizeUnit, IntoUnitRect, ParseUnitError, SizeUnit, UnitContext};

/// Process-unique node identity.
///
/// Ids are handed out by an atomic counter and never reused, so they are
/// safe hashing keys for renderer-side state that outlives tree mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

fn next_id() -> NodeId {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NodeId(NEXT.fetch_add(1, Ordering::Relaxed))
}

struct NodeData<S: Surface> {
    /// `[x, y, width, height]`.
    rect: [SizeUnit; 4],
    style: Style,
    /// Insertion-ordered; the only strong edges in the tree.
    children: SmallVec<[Node<S>; 4]>,
    parent: Weak<NodeInner<S>>,
    /// Sticky repaint flag, cleared by the renderer after painting.
    dirty: bool,
    visual: Box<dyn Visual<S>>,
    callbacks: Callbacks<S>,
}

struct NodeInner<S: Surface> {
    id: NodeId,
    name: String,
    data: RefCell<NodeData<S>>,
}

/// A shared handle to a retained tree node.
///
/// Cloning a `Node` clones the handle, not the node; all clones observe the
/// same geometry, style, children, and callbacks. See the crate docs for the
/// ownership and geometry contracts.
pub struct Node<S: Surface> {
    inner: Rc<NodeInner<S>>,
}

impl<S: Surface> Clone for Node<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Surface> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<S: Surface> Eq for Node<S> {}

impl<S: Surface> Node<S> {
    /// Creates a detached node with the given visual.
    ///
    /// `rect` is an `(x, y, width, height)` spec; each component may be a
    /// number, a [`SizeUnit`], or a textual spec like `"50pw"`. New nodes
    /// start dirty so they paint on their first frame.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual component cannot be parsed.
    pub fn new(
        name: impl Into<String>,
        rect: impl IntoUnitRect,
        visual: impl Visual<S> + 'static,
    ) -> Result<Self, ParseUnitError> {
        Ok(Self {
            inner: Rc::new(NodeInner {
                id: next_id(),
                name: name.into(),
                data: RefCell::new(NodeData {
                    rect: rect.into_units()?,
                    style: Style::new(),
                    children: SmallVec::new(),
                    parent: Weak::new(),
                    dirty: true,
                    visual: Box::new(visual),
                    callbacks: Callbacks::default(),
                }),
            }),
        })
    }

    /// Creates an invisible grouping node.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual component cannot be parsed.
    pub fn group(name: impl Into<String>, rect: impl IntoUnitRect) -> Result<Self, ParseUnitError> {
        Self::new(name, rect, ())
    }

    /// This node's process-unique id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.inner.id
    }

    /// This node's name, unique among its siblings.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether two handles refer to the same node.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The parent, when attached and still alive.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.inner
            .data
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Self { inner })
    }

    /// Declared horizontal offset.
    #[must_use]
    pub fn x(&self) -> SizeUnit {
        self.inner.data.borrow().rect[0]
    }

    /// Declared vertical offset.
    #[must_use]
    pub fn y(&self) -> SizeUnit {
        self.inner.data.borrow().rect[1]
    }

    /// Declared width.
    #[must_use]
    pub fn width(&self) -> SizeUnit {
        self.inner.data.borrow().rect[2]
    }

    /// Declared height.
    #[must_use]
    pub fn height(&self) -> SizeUnit {
        self.inner.data.borrow().rect[3]
    }

    /// Sets the horizontal offset and marks the node dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual spec cannot be parsed.
    pub fn set_x(&self, value: impl IntoSizeUnit) -> Result<(), ParseUnitError> {
        self.set_rect_slot(0, value.into_unit()?);
        Ok(())
    }

    /// Sets the vertical offset and marks the node dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual spec cannot be parsed.
    pub fn set_y(&self, value: impl IntoSizeUnit) -> Result<(), ParseUnitError> {
        self.set_rect_slot(1, value.into_unit()?);
        Ok(())
    }

    /// Sets the width and marks the node dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual spec cannot be parsed.
    pub fn set_width(&self, value: impl IntoSizeUnit) -> Result<(), ParseUnitError> {
        self.set_rect_slot(2, value.into_unit()?);
        Ok(())
    }

    /// Sets the height and marks the node dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUnitError`] when a textual spec cannot be parsed.
    pub fn set_height(&self, value: impl IntoSizeUnit) -> Result<(), ParseUnitError> {
        self.set_rect_slot(3, value.into_unit()?);
        Ok(())
    }

    fn set_rect_slot(&self, slot: usize, unit: SizeUnit) {
        let mut data = self.inner.data.borrow_mut();
        data.rect[slot] = unit;
        data.dirty = true;
    }

    /// A handle to this node's style store.
    ///
    /// The handle shares storage with the node, so writes through it are
    /// observed by the node's next update.
    #[must_use]
    pub fn style(&self) -> Style {
        self.inner.data.borrow().style.clone()
    }

    /// Replaces the style store and marks the node dirty.
    pub fn set_style(&self, style: Style) {
        let mut data = self.inner.data.borrow_mut();
        data.style = style;
        data.dirty = true;
    }

    /// Adopts `child`, appending it in insertion order.
    ///
    /// The operation fully succeeds or leaves both nodes unchanged.
    ///
    /// # Errors
    ///
    /// [`TreeError::ParentConflict`] when `child` is attached to a
    /// *different* parent, is this node itself, or is an ancestor of this
    /// node (adopting an ancestor would close a cycle);
    /// [`TreeError::NameConflict`] when a sibling already uses the name.
    /// Re-adding a child to its current parent falls through the parent
    /// check and reports `NameConflict`, since the child's own name is
    /// already taken there.
    pub fn add(&self, child: &Self) -> Result<(), TreeError> {
        if self.ptr_eq(child) || child.parent().is_some_and(|p| !p.ptr_eq(self)) {
            return Err(TreeError::ParentConflict {
                child: child.name().to_owned(),
                parent: self.name().to_owned(),
            });
        }
        let mut ancestor = self.parent();
        while let Some(node) = ancestor {
            if node.ptr_eq(child) {
                return Err(TreeError::ParentConflict {
                    child: child.name().to_owned(),
                    parent: self.name().to_owned(),
                });
            }
            ancestor = node.parent();
        }
        let mut data = self.inner.data.borrow_mut();
        if data.children.iter().any(|c| c.name() == child.name()) {
            return Err(TreeError::NameConflict {
                parent: self.name().to_owned(),
                name: child.name().to_owned(),
            });
        }
        data.children.push(child.clone());
        child.inner.data.borrow_mut().parent = Rc::downgrade(&self.inner);
        Ok(())
    }

    /// Attaches this node to `parent`; the mirror of [`Node::add`].
    ///
    /// # Errors
    ///
    /// See [`Node::add`].
    pub fn join(&self, parent: &Self) -> Result<(), TreeError> {
        parent.add(self)
    }

    /// Looks up a direct child by name.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no child has the name.
    pub fn child(&self, name: &str) -> Result<Self, TreeError> {
        self.inner
            .data
            .borrow()
            .children
            .iter()
            .find(|c| c.name() == name)
            .cloned()
            .ok_or_else(|| TreeError::NotFound {
                parent: self.name().to_owned(),
                name: name.to_owned(),
            })
    }

    /// A snapshot of the current child handles, in insertion order.
    ///
    /// Iterating the snapshot stays safe even when callbacks detach or add
    /// children mid-iteration; a detached child simply goes stale in the
    /// snapshot.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.inner.data.borrow().children.to_vec()
    }

    /// The number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.data.borrow().children.len()
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.data.borrow().children.is_empty()
    }

    /// Detaches and returns the named child, clearing its parent link.
    ///
    /// The detaching parent is marked dirty so the vacated pixels repaint.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no child has the name.
    pub fn remove(&self, name: &str) -> Result<Self, TreeError> {
        let mut data = self.inner.data.borrow_mut();
        let index = data
            .children
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| TreeError::NotFound {
                parent: self.name().to_owned(),
                name: name.to_owned(),
            })?;
        let child = data.children.remove(index);
        data.dirty = true;
        drop(data);
        child.inner.data.borrow_mut().parent = Weak::new();
        Ok(child)
    }

    /// Resolved horizontal screen position: the node's own evaluated offset
    /// plus the parent's resolved position, recursively to the root.
    #[must_use]
    pub fn resolve_x(&self, viewport: Size) -> f64 {
        let unit = self.x();
        let parent = self.parent();
        let own = unit.evaluate(&self.unit_context(unit, viewport, parent.as_ref()));
        own + parent.map_or(0.0, |p| p.resolve_x(viewport))
    }

    /// Resolved vertical screen position; see [`Node::resolve_x`].
    #[must_use]
    pub fn resolve_y(&self, viewport: Size) -> f64 {
        let unit = self.y();
        let parent = self.parent();
        let own = unit.evaluate(&self.unit_context(unit, viewport, parent.as_ref()));
        own + parent.map_or(0.0, |p| p.resolve_y(viewport))
    }

    /// Resolved width in pixels.
    ///
    /// Unlike position, size does not accumulate: only `pw`/`ph` units read
    /// the parent's resolved size, and absolute or viewport-relative widths
    /// ignore the parent entirely.
    #[must_use]
    pub fn resolve_width(&self, viewport: Size) -> f64 {
        let unit = self.width();
        unit.evaluate(&self.unit_context(unit, viewport, self.parent().as_ref()))
    }

    /// Resolved height in pixels; see [`Node::resolve_width`].
    #[must_use]
    pub fn resolve_height(&self, viewport: Size) -> f64 {
        let unit = self.height();
        unit.evaluate(&self.unit_context(unit, viewport, self.parent().as_ref()))
    }

    /// Resolved size in pixels.
    #[must_use]
    pub fn resolve_size(&self, viewport: Size) -> Size {
        Size::new(self.resolve_width(viewport), self.resolve_height(viewport))
    }

    /// The node's resolved screen rectangle.
    #[must_use]
    pub fn resolve_rect(&self, viewport: Size) -> Rect {
        Rect::from_origin_size(
            (self.resolve_x(viewport), self.resolve_y(viewport)),
            self.resolve_size(viewport),
        )
    }

    /// Builds the evaluation context for `unit`, resolving the parent's size
    /// only when the unit actually needs it.
    fn unit_context(&self, unit: SizeUnit, viewport: Size, parent: Option<&Self>) -> UnitContext {
        let parent = if unit.is_parent_relative() {
            parent.map(|p| p.resolve_size(viewport))
        } else {
            None
        };
        UnitContext { viewport, parent }
    }

    /// Runs one update step over this subtree.
    ///
    /// Polls the style's change log, folds in the sticky dirty flag, gives
    /// the visual its per-frame hook, then recurses into a child snapshot.
    /// Returns `true` when anything in the subtree needs repainting. The
    /// dirty flags stay set; the renderer clears them after painting.
    pub fn update(&self, dt: f64) -> bool {
        let mut changed = !self.style().poll_changes().is_empty();
        let mut visual = {
            let mut data = self.inner.data.borrow_mut();
            changed |= data.dirty;
            mem::replace(&mut data.visual, Box::new(()))
        };
        changed |= visual.update(self, dt);
        {
            let mut data = self.inner.data.borrow_mut();
            data.visual = visual;
            if changed {
                data.dirty = true;
            }
        }
        for child in self.children() {
            changed |= child.update(dt);
        }
        changed
    }

    /// Paints this node (not its children) onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the visual's [`RenderError`] unchanged.
    pub fn render(&self, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        // Take the visual out so it can read the node without aliasing the
        // interior borrow.
        let mut visual = {
            let mut data = self.inner.data.borrow_mut();
            mem::replace(&mut data.visual, Box::new(()))
        };
        let result = visual.render(self, surface);
        self.inner.data.borrow_mut().visual = visual;
        result
    }

    /// Whether this node needs repainting.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.inner.data.borrow().dirty
    }

    /// Marks this node for repaint.
    pub fn mark_dirty(&self) {
        self.inner.data.borrow_mut().dirty = true;
    }

    /// Clears the repaint flag; called by the renderer after painting.
    pub fn clear_dirty(&self) {
        self.inner.data.borrow_mut().dirty = false;
    }

    /// Fires the callback registered for `event`, if any.
    ///
    /// The slot is taken out for the duration of the call, so the callback
    /// may mutate the node freely, including detaching it or replacing its
    /// own registration.
    pub fn emit(&self, event: PointerEvent) {
        let taken = self.inner.data.borrow_mut().callbacks.take(event);
        if let Some(mut callback) = taken {
            callback(self);
            self.inner
                .data
                .borrow_mut()
                .callbacks
                .restore(event, callback);
        }
    }

    /// Registers the continuous hover callback.
    pub fn on_mouse_over(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Over, callback);
    }

    /// Registers the hover-enter callback.
    pub fn on_mouse_enter(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Enter, callback);
    }

    /// Registers the hover-leave callback.
    pub fn on_mouse_leave(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Leave, callback);
    }

    /// Registers the continuous press callback.
    pub fn on_mouse_down(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Down, callback);
    }

    /// Registers the release callback.
    pub fn on_mouse_up(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Up, callback);
    }

    /// Registers the click callback, fired on the press-down edge.
    pub fn on_mouse_click(&self, callback: impl FnMut(&Self) + 'static) {
        self.set_callback(PointerEvent::Click, callback);
    }

    fn set_callback(&self, event: PointerEvent, callback: impl FnMut(&Self) + 'static) {
        self.inner
            .data
            .borrow_mut()
            .callbacks
            .set(event, Box::new(callback));
    }
}

impl<S: Surface> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.data.borrow();
        f.debug_struct("Node")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("rect", &data.rect)
            .field("children", &data.children.len())
            .field("dirty", &data.dirty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctest_support::NullSurface;
    use std::cell::Cell;
    use std::rc::Rc;

    fn group(name: &str, rect: (i32, i32, i32, i32)) -> Node<NullSurface> {
        Node::group(name, rect).unwrap()
    }

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn ids_are_unique() {
        let a = group("a", (0, 0, 10, 10));
        let b = group("b", (0, 0, 10, 10));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a.clone().id());
    }

    #[test]
    fn add_sets_parent_and_preserves_order() {
        let root = group("root", (0, 0, 100, 100));
        for name in ["first", "second", "third"] {
            root.add(&group(name, (0, 0, 10, 10))).unwrap();
        }
        assert_eq!(root.len(), 3);
        let names: Vec<String> = root
            .children()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert!(root.child("second").unwrap().parent().unwrap().ptr_eq(&root));
    }

    #[test]
    fn add_rejects_already_parented_child() {
        let a = group("a", (0, 0, 100, 100));
        let b = group("b", (0, 0, 100, 100));
        let child = group("child", (0, 0, 10, 10));
        a.add(&child).unwrap();
        assert_eq!(
            b.add(&child),
            Err(TreeError::ParentConflict {
                child: "child".into(),
                parent: "b".into(),
            })
        );
        // The failed adoption changed nothing.
        assert!(b.is_empty());
        assert!(child.parent().unwrap().ptr_eq(&a));
    }

    #[test]
    fn add_rejects_self() {
        let a = group("a", (0, 0, 100, 100));
        assert!(matches!(a.add(&a), Err(TreeError::ParentConflict { .. })));
    }

    #[test]
    fn add_rejects_duplicate_sibling_name() {
        let root = group("root", (0, 0, 100, 100));
        root.add(&group("twin", (0, 0, 10, 10))).unwrap();
        let other = group("twin", (5, 5, 10, 10));
        assert_eq!(
            root.add(&other),
            Err(TreeError::NameConflict {
                parent: "root".into(),
                name: "twin".into(),
            })
        );
        assert_eq!(root.len(), 1);
        assert!(other.parent().is_none());
    }

    #[test]
    fn join_mirrors_add() {
        let root = group("root", (0, 0, 100, 100));
        let child = group("child", (0, 0, 10, 10));
        child.join(&root).unwrap();
        assert!(child.parent().unwrap().ptr_eq(&root));
        assert!(matches!(
            child.join(&root),
            Err(TreeError::NameConflict { .. })
        ));
    }

    #[test]
    fn readding_under_the_same_parent_is_a_name_conflict() {
        let root = group("root", (0, 0, 100, 100));
        let child = group("child", (0, 0, 10, 10));
        root.add(&child).unwrap();
        // The parent check only fires for a *different* parent; the re-add
        // falls through to the duplicate-name check.
        assert_eq!(
            root.add(&child),
            Err(TreeError::NameConflict {
                parent: "root".into(),
                name: "child".into(),
            })
        );
        assert_eq!(root.len(), 1);
        assert!(child.parent().unwrap().ptr_eq(&root));
    }

    #[test]
    fn add_rejects_an_ancestor() {
        let a = group("a", (0, 0, 100, 100));
        let b = group("b", (0, 0, 50, 50));
        let c = group("c", (0, 0, 10, 10));
        b.join(&a).unwrap();
        c.join(&b).unwrap();
        // Adopting an ancestor would make the hierarchy cyclic.
        assert!(matches!(b.add(&a), Err(TreeError::ParentConflict { .. })));
        assert!(matches!(c.add(&a), Err(TreeError::ParentConflict { .. })));
        assert!(a.parent().is_none());
        assert_eq!(b.len(), 1);
        // Geometry still resolves; no cycle was formed.
        assert_eq!(c.resolve_x(VIEWPORT), 0.0);
    }

    #[test]
    fn child_lookup_reports_missing_names() {
        let root = group("root", (0, 0, 100, 100));
        assert_eq!(
            root.child("ghost"),
            Err(TreeError::NotFound {
                parent: "root".into(),
                name: "ghost".into(),
            })
        );
    }

    #[test]
    fn remove_detaches_and_returns_the_child() {
        let root = group("root", (0, 0, 100, 100));
        root.add(&group("keep", (0, 0, 10, 10))).unwrap();
        root.add(&group("gone", (0, 0, 10, 10))).unwrap();
        let gone = root.remove("gone").unwrap();
        assert!(gone.parent().is_none());
        assert_eq!(root.len(), 1);
        assert!(root.child("gone").is_err());
        // The detached child is attachable again.
        root.add(&gone).unwrap();
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn dropping_the_container_orphans_held_children() {
        let child = group("child", (0, 0, 10, 10));
        {
            let root = group("root", (0, 0, 100, 100));
            root.add(&child).unwrap();
            assert!(child.parent().is_some());
        }
        assert!(child.parent().is_none());
    }

    #[test]
    fn dropping_a_child_handle_leaves_the_container_intact() {
        let root = group("root", (0, 0, 100, 100));
        {
            let child = group("child", (0, 0, 10, 10));
            root.add(&child).unwrap();
        }
        assert_eq!(root.len(), 1);
        assert_eq!(root.child("child").unwrap().name(), "child");
    }

    #[test]
    fn position_accumulates_through_ancestors() {
        let root = group("root", (10, 20, 300, 200));
        let panel = group("panel", (5, 5, 100, 100));
        let leaf = group("leaf", (1, 2, 10, 10));
        panel.join(&root).unwrap();
        leaf.join(&panel).unwrap();
        assert_eq!(leaf.resolve_x(VIEWPORT), 16.0);
        assert_eq!(leaf.resolve_y(VIEWPORT), 27.0);
    }

    #[test]
    fn size_does_not_accumulate() {
        let root = group("root", (10, 0, 300, 200));
        let child = Node::<NullSurface>::group("child", (5, 0, "50pw", "50ph")).unwrap();
        child.join(&root).unwrap();
        assert_eq!(child.resolve_x(VIEWPORT), 15.0);
        assert_eq!(child.resolve_width(VIEWPORT), 150.0);
        assert_eq!(child.resolve_height(VIEWPORT), 100.0);

        // A nested pw reads its own parent's resolved size, nothing above.
        let leaf = Node::<NullSurface>::group("leaf", (0, 0, "50pw", 10)).unwrap();
        leaf.join(&child).unwrap();
        assert_eq!(leaf.resolve_width(VIEWPORT), 75.0);

        // An absolute width ignores every ancestor.
        let fixed = Node::<NullSurface>::group("fixed", (0, 0, 42, 10)).unwrap();
        fixed.join(&child).unwrap();
        assert_eq!(fixed.resolve_width(VIEWPORT), 42.0);
    }

    #[test]
    fn viewport_units_ignore_the_parent() {
        let root = group("root", (0, 0, 100, 100));
        let child = Node::<NullSurface>::group("child", ("25sw", "50sh", "10sw", "10sh")).unwrap();
        child.join(&root).unwrap();
        assert_eq!(child.resolve_x(VIEWPORT), 200.0);
        assert_eq!(child.resolve_y(VIEWPORT), 300.0);
        assert_eq!(child.resolve_width(VIEWPORT), 80.0);
        assert_eq!(child.resolve_height(VIEWPORT), 60.0);
    }

    #[test]
    fn parent_relative_units_fall_back_to_the_viewport_when_detached() {
        let lone = Node::<NullSurface>::group("lone", (0, 0, "50pw", "50ph")).unwrap();
        assert_eq!(lone.resolve_width(VIEWPORT), 400.0);
        assert_eq!(lone.resolve_height(VIEWPORT), 300.0);
    }

    #[test]
    fn resolve_rect_combines_position_and_size() {
        let root = group("root", (10, 20, 300, 200));
        assert_eq!(
            root.resolve_rect(VIEWPORT),
            Rect::new(10.0, 20.0, 310.0, 220.0)
        );
    }

    #[test]
    fn geometry_setters_reject_bad_specs() {
        let node = group("node", (0, 0, 10, 10));
        assert!(node.set_x("12parsecs").is_err());
        assert_eq!(node.x(), SizeUnit::Px(0.0));
        node.set_x("25pw").unwrap();
        assert_eq!(node.x(), SizeUnit::pw(25.0));
    }

    #[test]
    fn new_nodes_report_dirty_until_cleared() {
        let node = group("node", (0, 0, 10, 10));
        assert!(node.is_dirty());
        assert!(node.update(16.0));
        node.clear_dirty();
        assert!(!node.update(16.0));
    }

    #[test]
    fn style_writes_dirty_the_subtree() {
        let root = group("root", (0, 0, 100, 100));
        let child = group("child", (0, 0, 10, 10));
        child.join(&root).unwrap();
        root.clear_dirty();
        child.clear_dirty();
        assert!(!root.update(16.0));

        child.style().set("color", 0xFF0000);
        assert!(root.update(16.0));
        assert!(child.is_dirty());

        // The change log drains, but the dirty flag is sticky until the
        // renderer paints.
        assert!(root.update(16.0));
        child.clear_dirty();
        root.clear_dirty();
        assert!(!root.update(16.0));
    }

    #[test]
    fn geometry_setters_dirty_the_node() {
        let node = group("node", (0, 0, 10, 10));
        node.clear_dirty();
        node.set_width(20).unwrap();
        assert!(node.is_dirty());
    }

    #[test]
    fn emit_without_a_callback_is_a_no_op() {
        let node = group("node", (0, 0, 10, 10));
        node.emit(PointerEvent::Click);
    }

    #[test]
    fn callbacks_receive_the_node_and_persist() {
        let node = group("node", (0, 0, 10, 10));
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        node.on_mouse_click(move |n| {
            assert_eq!(n.name(), "node");
            counter.set(counter.get() + 1);
        });
        node.emit(PointerEvent::Click);
        node.emit(PointerEvent::Click);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn a_callback_may_detach_its_own_node() {
        let root = group("root", (0, 0, 100, 100));
        let child = group("child", (0, 0, 10, 10));
        child.join(&root).unwrap();
        child.on_mouse_click(|node| {
            if let Some(parent) = node.parent() {
                parent.remove(node.name()).unwrap();
            }
        });
        child.emit(PointerEvent::Click);
        assert!(root.is_empty());
        assert!(child.parent().is_none());
        // A second emission finds the node already detached and stays calm.
        child.emit(PointerEvent::Click);
    }

    #[test]
    fn a_callback_may_replace_its_own_registration() {
        let node = group("node", (0, 0, 10, 10));
        let hits = Rc::new(Cell::new(0));
        let outer = Rc::clone(&hits);
        node.on_mouse_click(move |n| {
            outer.set(outer.get() + 1);
            let inner = Rc::clone(&outer);
            n.on_mouse_click(move |_| inner.set(inner.get() + 10));
        });
        node.emit(PointerEvent::Click);
        node.emit(PointerEvent::Click);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn a_callback_may_mutate_style_and_geometry() {
        let node = group("node", (0, 0, 10, 10));
        node.on_mouse_enter(|n| {
            n.style().set("color", 0x00FF00);
            n.set_width("50pw").unwrap();
        });
        node.clear_dirty();
        node.emit(PointerEvent::Enter);
        assert!(node.update(16.0));
        assert_eq!(node.width(), SizeUnit::pw(50.0));
    }
}
