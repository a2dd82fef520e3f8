//! Raw pointer events and their dispatch.

use crate::app::AnnotationCanvas;
use crate::types::Coordinate;

/// A pointer event on the drawing surface, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Coordinate),
    Move(Coordinate),
    Up(Coordinate),
    /// The pointer left the surface
    Leave,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::Down(Coordinate::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::Move(Coordinate::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::Up(Coordinate::new(x, y))
    }
}

impl AnnotationCanvas {
    /// Run one event to completion.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.handle_pointer_down(pos),
            PointerEvent::Move(pos) => self.handle_pointer_move(pos),
            PointerEvent::Up(pos) => self.handle_pointer_up(pos),
            PointerEvent::Leave => self.handle_pointer_leave(),
        }
    }

    /// Feed a sequence of events in order.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = PointerEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }
}
