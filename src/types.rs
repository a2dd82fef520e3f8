//! Core types for the annotation canvas.
//!
//! Coordinates are surface-relative pixels. A [`Rectangle`] keeps the two
//! corners the user actually dragged between, in the order they were drawn,
//! so `c0` is not necessarily the top-left.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Coordinates
// ============================================================================

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// An axis-aligned rectangle stored as two opposite corners.
///
/// Serialized as a two-element array `[c0, c1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Coordinate; 2]", into = "[Coordinate; 2]")]
pub struct Rectangle {
    /// First defining corner (where a create gesture started)
    pub c0: Coordinate,
    /// Opposite defining corner
    pub c1: Coordinate,
}

impl Rectangle {
    pub const fn new(c0: Coordinate, c1: Coordinate) -> Self {
        Self { c0, c1 }
    }

    /// Build from raw corner components.
    pub const fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            c0: Coordinate::new(x0, y0),
            c1: Coordinate::new(x1, y1),
        }
    }

    /// Same rectangle with the defining corners swapped.
    pub fn swapped(self) -> Self {
        Self {
            c0: self.c1,
            c1: self.c0,
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> f32 {
        (self.c1.x - self.c0.x).abs()
    }

    /// Height of the bounding box
    pub fn height(&self) -> f32 {
        (self.c1.y - self.c0.y).abs()
    }

    pub(crate) fn endpoint(&self, endpoint: Endpoint) -> Coordinate {
        match endpoint {
            Endpoint::Start => self.c0,
            Endpoint::End => self.c1,
        }
    }

    pub(crate) fn endpoint_mut(&mut self, endpoint: Endpoint) -> &mut Coordinate {
        match endpoint {
            Endpoint::Start => &mut self.c0,
            Endpoint::End => &mut self.c1,
        }
    }
}

impl From<[Coordinate; 2]> for Rectangle {
    fn from([c0, c1]: [Coordinate; 2]) -> Self {
        Self { c0, c1 }
    }
}

impl From<Rectangle> for [Coordinate; 2] {
    fn from(rect: Rectangle) -> Self {
        [rect.c0, rect.c1]
    }
}

/// Which of a rectangle's two defining coordinates a value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `c0`
    Start,
    /// `c1`
    End,
}

// ============================================================================
// Corners
// ============================================================================

/// One of the four derived corner points of a rectangle.
///
/// The order is fixed relative to the defining corners, not to screen
/// orientation: `P0 = c0`, `P1 = (c1.x, c0.y)`, `P2 = c1`, `P3 = (c0.x, c1.y)`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Corner {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
}

impl Corner {
    /// All corners in index order.
    pub const ALL: [Corner; 4] = [Corner::P0, Corner::P1, Corner::P2, Corner::P3];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl From<Corner> for u8 {
    fn from(corner: Corner) -> Self {
        corner as u8
    }
}

impl TryFrom<u8> for Corner {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Corner::from_index(value as usize).ok_or_else(|| format!("invalid corner index {value}"))
    }
}

/// A specific corner of a specific rectangle in the active collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CornerRef {
    /// Index into the active collection
    pub rectangle: usize,
    pub corner: Corner,
}

impl CornerRef {
    pub const fn new(rectangle: usize, corner: Corner) -> Self {
        Self { rectangle, corner }
    }
}

// ============================================================================
// Image Identifiers
// ============================================================================

/// Opaque identifier of the image a collection belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
