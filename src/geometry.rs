//! Pure geometry on unnormalized rectangles.
//!
//! Everything here works from per-axis min/max, so a rectangle whose `c0`
//! is below or right of `c1` behaves exactly like its normalized twin.

use crate::types::{Coordinate, Corner, Endpoint, Rectangle};

/// Where a corner takes its x and y from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerBinding {
    pub x: Endpoint,
    pub y: Endpoint,
}

/// Corner index → defining coordinate feeding each axis.
///
/// Shared by [`corner_points`] and the resize rule, so a grabbed corner is
/// always the corner that moves.
pub const CORNER_BINDINGS: [CornerBinding; 4] = [
    CornerBinding {
        x: Endpoint::Start,
        y: Endpoint::Start,
    },
    CornerBinding {
        x: Endpoint::End,
        y: Endpoint::Start,
    },
    CornerBinding {
        x: Endpoint::End,
        y: Endpoint::End,
    },
    CornerBinding {
        x: Endpoint::Start,
        y: Endpoint::End,
    },
];

#[inline]
pub fn binding(corner: Corner) -> CornerBinding {
    CORNER_BINDINGS[corner.index()]
}

/// Position of a single derived corner.
#[inline]
pub fn corner_point(rect: &Rectangle, corner: Corner) -> Coordinate {
    let b = binding(corner);
    Coordinate::new(rect.endpoint(b.x).x, rect.endpoint(b.y).y)
}

/// The four derived corners in index order.
pub fn corner_points(rect: &Rectangle) -> [Coordinate; 4] {
    Corner::ALL.map(|corner| corner_point(rect, corner))
}

/// Independent per-axis proximity test (strict), not a Euclidean distance.
#[inline]
pub fn is_near(a: Coordinate, b: Coordinate, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

/// Normalized bounds as `(min_x, min_y, max_x, max_y)`.
#[inline]
pub fn bounds(rect: &Rectangle) -> (f32, f32, f32, f32) {
    (
        rect.c0.x.min(rect.c1.x),
        rect.c0.y.min(rect.c1.y),
        rect.c0.x.max(rect.c1.x),
        rect.c0.y.max(rect.c1.y),
    )
}

/// True if `point` lies inside or on the edge of the rectangle's bounding box.
#[inline]
pub fn contains(point: Coordinate, rect: &Rectangle) -> bool {
    let (min_x, min_y, max_x, max_y) = bounds(rect);
    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}
