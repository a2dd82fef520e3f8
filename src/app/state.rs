//! Application state - the AnnotationCanvas struct definition.

use crate::geometry::corner_point;
use crate::input::InputState;
use crate::render::{Background, Surface};
use crate::settings::Settings;
use crate::spatial_index::CornerIndex;
use crate::store::RectangleStore;
use crate::types::{Coordinate, CornerRef, ImageId, Rectangle};
use serde::Serialize;

/// The interaction core for one drawing surface.
///
/// Exactly one collection is active at a time. Every pointer event runs to
/// completion, mutates the store only through the state machine and ends
/// with a full redraw when a surface is attached.
pub struct AnnotationCanvas {
    pub(crate) settings: Settings,
    pub(crate) store: RectangleStore,
    pub(crate) input_state: InputState,

    // Hover tracking, only meaningful while idle
    pub(crate) hovered_corner: Option<CornerRef>,
    pub(crate) hovered_rectangle: Option<usize>,
    pub(crate) last_pointer: Option<Coordinate>,
    pub(crate) corner_index: CornerIndex,

    pub(crate) surface: Option<Surface>,
    pub(crate) background: Option<Background>,
    pub(crate) frames_rendered: u64,
}

impl AnnotationCanvas {
    pub fn new(image_id: impl Into<ImageId>, rectangles: Option<Vec<Rectangle>>) -> Self {
        Self::with_settings(image_id, rectangles, Settings::default())
    }

    /// Settings that fail [`Settings::validate`] are replaced by the defaults.
    pub fn with_settings(
        image_id: impl Into<ImageId>,
        rectangles: Option<Vec<Rectangle>>,
        settings: Settings,
    ) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                tracing::warn!("Invalid settings, using defaults: {}", e);
                Settings::default()
            }
        };
        Self {
            settings,
            store: RectangleStore::new(image_id.into(), rectangles),
            input_state: InputState::default(),
            hovered_corner: None,
            hovered_rectangle: None,
            last_pointer: None,
            corner_index: CornerIndex::new(),
            surface: None,
            background: None,
            frames_rendered: 0,
        }
    }

    pub fn image_id(&self) -> &ImageId {
        self.store.image_id()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        self.store.rectangles()
    }

    pub fn store(&self) -> &RectangleStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn hovered_corner(&self) -> Option<CornerRef> {
        self.hovered_corner
    }

    /// Topmost rectangle under the pointer while idle.
    pub fn hovered_rectangle(&self) -> Option<usize> {
        self.hovered_rectangle
    }

    pub fn last_pointer(&self) -> Option<Coordinate> {
        self.last_pointer
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Where the hover marker goes, if any.
    pub fn marker_position(&self) -> Option<Coordinate> {
        let target = self.hovered_corner?;
        self.store
            .get(target.rectangle)
            .map(|rect| corner_point(rect, target.corner))
    }

    /// The uncommitted rectangle of an active create gesture.
    pub fn preview_rectangle(&self) -> Option<Rectangle> {
        self.input_state
            .preview()
            .map(|(anchor, current)| Rectangle::new(anchor, current))
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        let (anchor, current) = match self.input_state.preview() {
            Some((a, c)) => (Some(a), Some(c)),
            None => (None, None),
        };
        InteractionSnapshot {
            image_id: self.store.image_id().clone(),
            mode: self.input_state.label(),
            anchor,
            current,
            resize_target: self.input_state.resize_target(),
            hovered_corner: self.hovered_corner,
            hovered_rectangle: self.hovered_rectangle,
            pointer: self.last_pointer,
            rectangle_count: self.store.len(),
        }
    }
}

/// Serializable read-out of the interaction state, for debug overlays and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSnapshot {
    pub image_id: ImageId,
    pub mode: &'static str,
    pub anchor: Option<Coordinate>,
    pub current: Option<Coordinate>,
    pub resize_target: Option<CornerRef>,
    pub hovered_corner: Option<CornerRef>,
    pub hovered_rectangle: Option<usize>,
    pub pointer: Option<Coordinate>,
    pub rectangle_count: usize,
}
