//! Input state machine - one enum for every gesture the canvas supports.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Creating      (pointer down away from every corner)
//! Idle -> Resizing      (pointer down while a corner is hovered)
//!
//! Creating -> Idle      (pointer up / leave - commit or discard)
//! Resizing -> Idle      (pointer up / leave - final mutation)
//! ```

use crate::types::{Coordinate, CornerRef};

/// Current gesture on the canvas.
///
/// Creating and resizing are variants of one enum, so the canvas can never
/// be in both at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Drawing a new rectangle
    Creating {
        /// Where the pointer went down
        anchor: Coordinate,
        /// Live opposite corner
        current: Coordinate,
    },

    /// Dragging a corner of an existing rectangle
    Resizing {
        /// Rectangle and corner being dragged
        target: CornerRef,
        /// Last pointer position seen during the drag
        last: Coordinate,
    },
}

impl InputState {
    /// Returns true while a create or resize gesture is in progress
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Start a create gesture at `anchor`
    pub fn start_creating(&mut self, anchor: Coordinate) {
        *self = Self::Creating {
            anchor,
            current: anchor,
        };
    }

    /// Start dragging `target` from `pos`
    pub fn start_resizing(&mut self, target: CornerRef, pos: Coordinate) {
        *self = Self::Resizing { target, last: pos };
    }

    /// Record the latest pointer position for whichever gesture is active
    pub fn track(&mut self, pos: Coordinate) {
        match self {
            Self::Creating { current, .. } => *current = pos,
            Self::Resizing { last, .. } => *last = pos,
            Self::Idle => {}
        }
    }

    /// The in-progress rectangle's two corners, if creating
    pub fn preview(&self) -> Option<(Coordinate, Coordinate)> {
        match self {
            Self::Creating { anchor, current } => Some((*anchor, *current)),
            _ => None,
        }
    }

    /// The corner being dragged, if resizing
    pub fn resize_target(&self) -> Option<CornerRef> {
        match self {
            Self::Resizing { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Leave the current gesture, returning what it was
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Short label for logs and snapshots
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Creating { .. } => "creating",
            Self::Resizing { .. } => "resizing",
        }
    }
}
