//! Spatial Index Module
//!
//! Provides an R-tree over rectangle corner points for the hover scan.
//! A pointer query returns the same corner a front-to-back scan of the
//! collection would find first: the smallest `(rectangle, corner)` pair.

use crate::geometry::{corner_points, is_near};
use crate::types::{Coordinate, Corner, CornerRef, Rectangle};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// A spatial entry for one derived corner.
#[derive(Debug, Clone, Copy)]
pub struct CornerEntry {
    pub target: CornerRef,
    pub point: Coordinate,
}

impl RTreeObject for CornerEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.x, self.point.y])
    }
}

impl PointDistance for CornerEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point.x - point[0];
        let dy = self.point.y - point[1];
        dx * dx + dy * dy
    }
}

impl PartialEq for CornerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

/// Corner index for one rectangle collection.
///
/// Tracks the store revision it was built from so callers can rebuild
/// lazily instead of after every in-place edit.
pub struct CornerIndex {
    tree: RTree<CornerEntry>,
    revision: Option<u64>,
}

impl CornerIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            revision: None,
        }
    }

    /// Build an index from a rectangle collection.
    pub fn from_rectangles(rectangles: &[Rectangle]) -> Self {
        let mut index = Self::new();
        index.rebuild(rectangles, None);
        index
    }

    pub fn rebuild(&mut self, rectangles: &[Rectangle], revision: Option<u64>) {
        let entries: Vec<CornerEntry> = rectangles
            .iter()
            .enumerate()
            .flat_map(|(i, rect)| {
                corner_points(rect)
                    .into_iter()
                    .zip(Corner::ALL)
                    .map(move |(point, corner)| CornerEntry {
                        target: CornerRef::new(i, corner),
                        point,
                    })
            })
            .collect();

        self.tree = RTree::bulk_load(entries);
        self.revision = revision;
    }

    /// Rebuild only if the collection changed since the last build.
    pub fn sync(&mut self, rectangles: &[Rectangle], revision: u64) {
        if self.revision != Some(revision) {
            self.rebuild(rectangles, Some(revision));
        }
    }

    /// First corner within `threshold` of `point` on both axes.
    pub fn query_near(&self, point: Coordinate, threshold: f32) -> Option<CornerRef> {
        let envelope = AABB::from_corners(
            [point.x - threshold, point.y - threshold],
            [point.x + threshold, point.y + threshold],
        );

        self.tree
            .locate_in_envelope(&envelope)
            .filter(|entry| is_near(entry.point, point, threshold))
            .map(|entry| entry.target)
            .min()
    }

    /// Number of indexed corners.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.revision = None;
    }
}

impl Default for CornerIndex {
    fn default() -> Self {
        Self::new()
    }
}
