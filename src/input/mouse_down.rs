//! Pointer down handling - start a create or resize gesture.

use crate::app::AnnotationCanvas;
use crate::profile_scope;
use crate::types::Coordinate;

impl AnnotationCanvas {
    pub fn handle_pointer_down(&mut self, pos: Coordinate) {
        profile_scope!("handle_pointer_down");

        if self.input_state.is_dragging() {
            tracing::debug!(state = self.input_state.label(), "Pointer down during active gesture ignored");
            return;
        }

        self.last_pointer = Some(pos);

        // Hosts that skip the move before a press still grab the right corner
        self.scan_hover(pos);

        match self.hovered_corner.take() {
            Some(target) => {
                tracing::debug!(
                    rectangle = target.rectangle,
                    corner = target.corner.index(),
                    "Resize started"
                );
                self.input_state.start_resizing(target, pos);
            }
            None => {
                tracing::debug!(x = pos.x, y = pos.y, "Create started");
                self.input_state.start_creating(pos);
            }
        }
        self.hovered_rectangle = None;

        self.render();
    }
}
