//! Pointer move handling - hover scan, create preview, corner resize.
//!
//! ## Performance Notes
//!
//! Move events arrive at pointer rate. The hover scan goes through the
//! corner R-tree, which is only rebuilt when the store revision changed.

use crate::app::AnnotationCanvas;
use crate::geometry::contains;
use crate::input::InputState;
use crate::input::resize::apply_resize;
use crate::profile_scope;
use crate::types::{Coordinate, CornerRef};

impl AnnotationCanvas {
    pub fn handle_pointer_move(&mut self, pos: Coordinate) {
        profile_scope!("handle_pointer_move");

        self.last_pointer = Some(pos);

        match self.input_state {
            InputState::Idle => {
                self.scan_hover(pos);
            }
            InputState::Creating { .. } => {
                self.input_state.track(pos);
            }
            InputState::Resizing { target, .. } => {
                self.input_state.track(pos);
                self.resize_corner(target, pos);
            }
        }

        // Full redraw also wipes a marker left by the previous hover
        self.render();
    }

    /// Refresh the hovered corner and hovered rectangle for `pos`.
    pub(crate) fn scan_hover(&mut self, pos: Coordinate) {
        profile_scope!("hover_scan");

        self.corner_index
            .sync(self.store.rectangles(), self.store.revision());
        self.hovered_corner = self
            .corner_index
            .query_near(pos, self.settings.proximity_threshold);

        // Topmost wins, matching paint order
        self.hovered_rectangle = self
            .store
            .rectangles()
            .iter()
            .rposition(|rect| contains(pos, rect));
    }

    /// Move one corner and push the edit to observers.
    pub(crate) fn resize_corner(&mut self, target: CornerRef, pos: Coordinate) {
        let updated = self
            .store
            .update(target.rectangle, |rect| apply_resize(rect, target.corner, pos));
        if !updated {
            tracing::warn!(rectangle = target.rectangle, "Resize target no longer exists");
        }
    }
}
