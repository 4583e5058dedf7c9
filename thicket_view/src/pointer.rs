// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as sampled once per frame.

use kurbo::Point;

bitflags::bitflags! {
    /// The set of pointer buttons currently held.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Left mouse button, or the touch contact.
        const PRIMARY = 1;
        /// Right mouse button.
        const SECONDARY = 1 << 1;
        /// Middle mouse button.
        const MIDDLE = 1 << 2;
    }
}

/// A single-frame sample of the pointer.
///
/// The renderer compares consecutive samples to synthesize enter/leave and
/// press/release edges; callers only report where the pointer is and which
/// buttons are down. The press state machine keys on
/// [`PointerButtons::PRIMARY`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Position in composition-surface pixels.
    pub position: Point,
    /// Buttons held during this frame.
    pub buttons: PointerButtons,
}

impl PointerState {
    /// A sample at `position` with the given buttons.
    #[must_use]
    pub fn new(position: impl Into<Point>, buttons: PointerButtons) -> Self {
        Self {
            position: position.into(),
            buttons,
        }
    }

    /// A hover sample: pointer at `position`, no buttons held.
    #[must_use]
    pub fn hover(position: impl Into<Point>) -> Self {
        Self::new(position, PointerButtons::empty())
    }

    /// A press sample: pointer at `position` with the primary button held.
    #[must_use]
    pub fn press(position: impl Into<Point>) -> Self {
        Self::new(position, PointerButtons::PRIMARY)
    }

    /// Whether the primary button is held.
    #[inline]
    #[must_use]
    pub fn primary(&self) -> bool {
        self.buttons.contains(PointerButtons::PRIMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_ignores_other_buttons() {
        assert!(PointerState::press((1.0, 2.0)).primary());
        assert!(!PointerState::hover((1.0, 2.0)).primary());
        let state = PointerState::new((0.0, 0.0), PointerButtons::SECONDARY);
        assert!(!state.primary());
        let both = PointerState::new((0.0, 0.0), PointerButtons::PRIMARY | PointerButtons::MIDDLE);
        assert!(both.primary());
    }
}
