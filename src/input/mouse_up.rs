//! Pointer up / leave handling - finalize the active gesture.
//!
//! Leaving the surface ends a gesture exactly like releasing the button
//! at the last known position, so no drag survives an exit.

use crate::app::AnnotationCanvas;
use crate::input::InputState;
use crate::profile_scope;
use crate::types::{Coordinate, Rectangle};

impl AnnotationCanvas {
    pub fn handle_pointer_up(&mut self, pos: Coordinate) {
        profile_scope!("handle_pointer_up");

        self.last_pointer = Some(pos);
        self.input_state.track(pos);
        self.finish_gesture();

        self.scan_hover(pos);
        self.render();
    }

    pub fn handle_pointer_leave(&mut self) {
        profile_scope!("handle_pointer_leave");

        self.finish_gesture();

        self.last_pointer = None;
        self.hovered_corner = None;
        self.hovered_rectangle = None;
        self.render();
    }

    /// Commit, discard or finalize whatever gesture is active; always ends idle.
    fn finish_gesture(&mut self) {
        match self.input_state.take() {
            InputState::Idle => {}
            InputState::Creating { anchor, current } => {
                let dx = (current.x - anchor.x).abs();
                let dy = (current.y - anchor.y).abs();
                let min = self.settings.min_rectangle_size;

                if dx >= min && dy >= min {
                    let index = self.store.push(Rectangle::new(anchor, current));
                    tracing::info!(
                        image = %self.store.image_id(),
                        index,
                        width = dx,
                        height = dy,
                        "Rectangle committed"
                    );
                } else {
                    tracing::debug!(width = dx, height = dy, min, "Rectangle too small, discarded");
                }
            }
            InputState::Resizing { target, last } => {
                self.resize_corner(target, last);
                tracing::debug!(
                    rectangle = target.rectangle,
                    corner = target.corner.index(),
                    "Resize finished"
                );
            }
        }
    }
}
