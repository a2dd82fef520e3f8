//! Corner → coordinate mutation rule for resizing.
//!
//! Dragging a corner writes the pointer's x into whichever defining
//! coordinate supplies that corner's x, and likewise for y. The lookup is
//! the same [`crate::geometry::CORNER_BINDINGS`] table the corner points are derived from.

use crate::geometry::binding;
use crate::types::{Coordinate, Corner, Rectangle};

/// Move `corner` of `rect` to `pointer`.
pub fn apply_resize(rect: &mut Rectangle, corner: Corner, pointer: Coordinate) {
    let b = binding(corner);
    rect.endpoint_mut(b.x).x = pointer.x;
    rect.endpoint_mut(b.y).y = pointer.y;
}

/// Non-mutating form of [`apply_resize`].
pub fn resized(mut rect: Rectangle, corner: Corner, pointer: Coordinate) -> Rectangle {
    apply_resize(&mut rect, corner, pointer);
    rect
}
