// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session tracking: pointer deltas plus click-versus-drag detection.
//!
//! ## Usage
//!
//! 1) Open a session with [`DragSession::start`] on pointer-down.
//! 2) On each move, call [`DragSession::update`] to get the delta since the
//!    previous position. Any update marks the session as moved.
//! 3) Drop the session on pointer-up; [`DragSession::has_moved`] tells a click
//!    apart from a pan.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use glance_viewport::DragSession;
//!
//! let mut drag = DragSession::start(Point::new(10.0, 20.0));
//! assert!(!drag.has_moved());
//!
//! let delta = drag.update(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! assert!(drag.has_moved());
//! assert_eq!(drag.total_offset(), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Pointer buttons held during a move, using DOM `MouseEvent.buttons` bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        /// Usually the left button.
        const PRIMARY = 1;
        /// Usually the right button.
        const SECONDARY = 1 << 1;
        /// Usually the wheel button.
        const AUXILIARY = 1 << 2;
        /// Browser "back".
        const BACK = 1 << 3;
        /// Browser "forward".
        const FORWARD = 1 << 4;
    }
}

/// One pointer-down to pointer-up gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_pos: Point,
    last_pos: Point,
    has_moved: bool,
}

impl DragSession {
    /// Opens a session at `pos`.
    #[must_use]
    pub fn start(pos: Point) -> Self {
        Self {
            start_pos: pos,
            last_pos: pos,
            has_moved: false,
        }
    }

    /// Records a new pointer position, returning the delta since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        self.has_moved = true;
        delta
    }

    /// Position the session started at.
    #[must_use]
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Offset of the last recorded position from the start.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last_pos - self.start_pos
    }

    /// Returns `true` once any move has been recorded.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{DragSession, PointerButtons};

    #[test]
    fn new_session_has_not_moved() {
        let start = Point::new(10.0, 20.0);
        let drag = DragSession::start(start);

        assert!(!drag.has_moved());
        assert_eq!(drag.start_pos(), start);
        assert_eq!(drag.last_pos(), start);
        assert_eq!(drag.total_offset(), Vec2::ZERO);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragSession::start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Vec2::new(2.0, 3.0));
        assert_eq!(drag.total_offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn negative_movement_deltas() {
        let mut drag = DragSession::start(Point::new(100.0, 100.0));

        let delta = drag.update(Point::new(90.0, 85.0));

        assert_eq!(delta, Vec2::new(-10.0, -15.0));
    }

    #[test]
    fn zero_movement_still_counts_as_moved() {
        let start = Point::new(50.0, 50.0);
        let mut drag = DragSession::start(start);

        let delta = drag.update(start);

        assert_eq!(delta, Vec2::ZERO);
        assert!(drag.has_moved());
    }

    #[test]
    fn buttons_follow_dom_bit_layout() {
        assert_eq!(PointerButtons::from_bits_truncate(1), PointerButtons::PRIMARY);
        let chord = PointerButtons::from_bits_truncate(0b101);
        assert!(chord.contains(PointerButtons::PRIMARY));
        assert!(chord.contains(PointerButtons::AUXILIARY));
        assert!(!chord.contains(PointerButtons::SECONDARY));
        assert!(!PointerButtons::empty().contains(PointerButtons::PRIMARY));
    }
}
