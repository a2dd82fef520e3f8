//! Canvas rendering - background, committed rectangles, preview and hover marker.
//!
//! Every trigger redraws the whole frame from the current state:
//! 1. Clear the surface
//! 2. Background image at the origin, scaled to its draw size
//! 3. Committed rectangles in store order (later ones paint over earlier)
//! 4. The in-progress rectangle of a create gesture, above everything committed
//! 5. The hover marker on the hovered corner
//!
//! ## Performance Notes
//!
//! This runs after every pointer event. Nothing is cached between frames, so
//! two renders of the same state are pixel-identical.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::AnnotationCanvas;
use crate::geometry::bounds;
use crate::profile_scope;
use crate::render::Background;
use crate::settings::{RenderStyle, Rgba};
use crate::types::{Coordinate, Rectangle};
use tiny_skia::{FillRule, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// Everything one frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub background: Option<&'a Background>,
    pub rectangles: &'a [Rectangle],
    pub preview: Option<Rectangle>,
    pub marker: Option<Coordinate>,
    pub style: &'a RenderStyle,
}

/// What the last frame actually painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub background: bool,
    pub rectangles: usize,
    pub preview: bool,
    pub marker: bool,
}

/// Draw `frame` into `pixmap`, replacing its previous contents.
pub fn draw_frame(pixmap: &mut Pixmap, frame: &Frame<'_>) -> FrameStats {
    let mut stats = FrameStats::default();
    pixmap.fill(tiny_skia::Color::TRANSPARENT);

    if let Some(background) = frame.background.filter(|bg| bg.is_visible()) {
        background.draw(pixmap);
        stats.background = true;
    }

    for rect in frame.rectangles {
        if draw_rectangle(pixmap, rect, frame.style) {
            stats.rectangles += 1;
        }
    }

    if let Some(preview) = &frame.preview {
        stats.preview = draw_rectangle(pixmap, preview, frame.style);
    }

    if let Some(center) = frame.marker {
        stats.marker = draw_marker(pixmap, center, frame.style);
    }

    stats
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn rectangle_path(rect: &Rectangle) -> Option<Path> {
    // Corner order does not matter, only the bounding box
    let (min_x, min_y, max_x, max_y) = bounds(rect);

    let mut pb = PathBuilder::new();
    pb.move_to(min_x, min_y);
    pb.line_to(max_x, min_y);
    pb.line_to(max_x, max_y);
    pb.line_to(min_x, max_y);
    pb.close();
    pb.finish()
}

/// Returns false when no path could be built and nothing was painted.
fn draw_rectangle(pixmap: &mut Pixmap, rect: &Rectangle, style: &RenderStyle) -> bool {
    let Some(path) = rectangle_path(rect) else {
        return false;
    };

    pixmap.fill_path(
        &path,
        &paint_for(style.rect_fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    if style.rect_stroke_width > 0.0 {
        let stroke = Stroke {
            width: style.rect_stroke_width,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(
            &path,
            &paint_for(style.rect_stroke),
            &stroke,
            Transform::identity(),
            None,
        );
    }
    true
}

fn draw_marker(pixmap: &mut Pixmap, center: Coordinate, style: &RenderStyle) -> bool {
    let Some(path) = PathBuilder::from_circle(center.x, center.y, style.marker_radius) else {
        return false;
    };

    pixmap.fill_path(
        &path,
        &paint_for(style.marker_fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    if style.marker_stroke_width > 0.0 {
        let stroke = Stroke {
            width: style.marker_stroke_width,
            ..Default::default()
        };
        pixmap.stroke_path(
            &path,
            &paint_for(style.marker_stroke),
            &stroke,
            Transform::identity(),
            None,
        );
    }
    true
}

impl AnnotationCanvas {
    /// Redraw the attached surface from the current state.
    ///
    /// Returns false, and draws nothing, when no surface is attached.
    pub fn render(&mut self) -> bool {
        profile_scope!("render");

        let preview = self.preview_rectangle();
        let marker = self.marker_position();

        let Some(surface) = self.surface.as_mut() else {
            return false;
        };

        let frame = Frame {
            background: self.background.as_ref(),
            rectangles: self.store.rectangles(),
            preview,
            marker,
            style: &self.settings.style,
        };
        let stats = draw_frame(surface.pixmap_mut(), &frame);
        self.frames_rendered += 1;

        tracing::trace!(
            frame = self.frames_rendered,
            background = stats.background,
            rectangles = stats.rectangles,
            preview = stats.preview,
            marker = stats.marker,
            "Frame rendered"
        );
        true
    }
}
