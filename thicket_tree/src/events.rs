// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and per-node callback storage.

use crate::Node;
use thicket_surface::Surface;

/// A pointer event synthesized by the renderer's hover/press state machines.
///
/// `Over` and `Down` are continuous (fired every frame while the condition
/// holds); the others are edges. `Click` fires on the press-*down* edge, not
/// on release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer is inside the node's resolved rect this frame.
    Over,
    /// The pointer moved into the node's resolved rect.
    Enter,
    /// The pointer moved out of the node's resolved rect.
    Leave,
    /// The primary button is held while the node is hovered.
    Down,
    /// The primary button was released over a pressed node.
    Up,
    /// The primary button went down while the node is hovered.
    Click,
}

impl PointerEvent {
    /// Index into a node's callback slots.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Over => 0,
            Self::Enter => 1,
            Self::Leave => 2,
            Self::Down => 3,
            Self::Up => 4,
            Self::Click => 5,
        }
    }
}

/// A pointer callback: borrows the node it is attached to.
pub(crate) type Callback<S> = Box<dyn FnMut(&Node<S>)>;

/// One optional callback slot per [`PointerEvent`].
pub(crate) struct Callbacks<S: Surface> {
    slots: [Option<Callback<S>>; 6],
}

impl<S: Surface> Default for Callbacks<S> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None, None, None],
        }
    }
}

impl<S: Surface> Callbacks<S> {
    pub(crate) fn set(&mut self, event: PointerEvent, callback: Callback<S>) {
        self.slots[event.index()] = Some(callback);
    }

    /// Takes the slot out for a reentrancy-safe call.
    pub(crate) fn take(&mut self, event: PointerEvent) -> Option<Callback<S>> {
        self.slots[event.index()].take()
    }

    /// Puts a taken callback back, unless the callback itself installed a
    /// replacement while it ran.
    pub(crate) fn restore(&mut self, event: PointerEvent, callback: Callback<S>) {
        let slot = &mut self.slots[event.index()];
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

impl<S: Surface> std::fmt::Debug for Callbacks<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set: Vec<usize> = (0..self.slots.len())
            .filter(|&i| self.slots[i].is_some())
            .collect();
        f.debug_struct("Callbacks").field("set", &set).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_distinct() {
        let all = [
            PointerEvent::Over,
            PointerEvent::Enter,
            PointerEvent::Leave,
            PointerEvent::Down,
            PointerEvent::Up,
            PointerEvent::Click,
        ];
        let mut seen = [false; 6];
        for event in all {
            assert!(!seen[event.index()]);
            seen[event.index()] = true;
        }
    }
}
