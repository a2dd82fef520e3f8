//! Render pipeline through the canvas: surfaces, backgrounds, overlays.

use crate::helpers::{TestCanvasBuilder, drag, empty_canvas};
use annoboard::PointerEvent;
use annoboard::render::{Background, Surface};
use annoboard::settings::{Rgba, Settings};
use image::{Rgba as Pixel, RgbaImage};

fn alpha_at(canvas: &annoboard::AnnotationCanvas, x: u32, y: u32) -> u8 {
    canvas.surface().and_then(|s| s.pixel(x, y)).map(|p| p[3]).unwrap_or(0)
}

#[test]
fn test_without_surface_nothing_renders() {
    let mut canvas = empty_canvas();
    assert!(!canvas.render());

    drag(&mut canvas, (10.0, 10.0), (60.0, 60.0));
    canvas.handle_event(PointerEvent::moved(10.0, 10.0));
    assert_eq!(canvas.frames_rendered(), 0);
    assert_eq!(canvas.rectangles().len(), 1);
}

#[test]
fn test_every_event_redraws() {
    let mut canvas = TestCanvasBuilder::new().with_surface(50, 50).build();
    assert_eq!(canvas.frames_rendered(), 1);

    canvas.handle_events([
        PointerEvent::moved(1.0, 1.0),
        PointerEvent::down(1.0, 1.0),
        PointerEvent::up(2.0, 2.0),
        PointerEvent::Leave,
    ]);
    assert_eq!(canvas.frames_rendered(), 5);
}

#[test]
fn test_render_is_idempotent() {
    let image = RgbaImage::from_fn(8, 8, |x, y| Pixel([(x * 30) as u8, (y * 30) as u8, 90, 255]));
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(20.0, 20.0, 80.0, 80.0)
        .with_rect(90.0, 10.0, 40.0, 70.0)
        .with_surface(120, 120)
        .build();
    canvas.set_background(Some(Background::new(&image, 100.0, 100.0)));
    canvas.handle_events([PointerEvent::moved(21.0, 21.0)]);

    canvas.render();
    let first = canvas.surface().unwrap().data().to_vec();
    canvas.render();
    assert_eq!(canvas.surface().unwrap().data(), first.as_slice());
}

#[test]
fn test_committed_rectangle_is_filled() {
    let mut canvas = TestCanvasBuilder::new().with_surface(100, 100).build();
    drag(&mut canvas, (20.0, 20.0), (80.0, 80.0));

    let inside = canvas.surface().unwrap().pixel(50, 50).unwrap();
    assert_eq!(inside[3], 153);
    assert_eq!(alpha_at(&canvas, 90, 90), 0);
}

#[test]
fn test_marker_only_while_hovering() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(20.0, 20.0, 80.0, 80.0)
        .with_surface(100, 100)
        .build();

    canvas.handle_event(PointerEvent::moved(50.0, 50.0));
    assert_eq!(alpha_at(&canvas, 15, 20), 0);

    canvas.handle_event(PointerEvent::moved(22.0, 22.0));
    assert!(alpha_at(&canvas, 15, 20) > 0);

    // Moving away erases the stale marker
    canvas.handle_event(PointerEvent::moved(50.0, 50.0));
    assert_eq!(alpha_at(&canvas, 15, 20), 0);
}

#[test]
fn test_preview_follows_create_drag() {
    let mut canvas = TestCanvasBuilder::new().with_surface(100, 100).build();

    canvas.handle_events([PointerEvent::down(10.0, 10.0), PointerEvent::moved(60.0, 60.0)]);
    assert!(alpha_at(&canvas, 35, 35) > 0);
    assert!(canvas.preview_rectangle().is_some());

    // Too small on release: the preview disappears with nothing committed
    canvas.handle_events([PointerEvent::moved(20.0, 20.0), PointerEvent::up(20.0, 20.0)]);
    assert_eq!(alpha_at(&canvas, 35, 35), 0);
    assert!(canvas.rectangles().is_empty());
}

#[test]
fn test_inverted_rectangle_renders_the_same() {
    let normal = TestCanvasBuilder::new()
        .with_rect(10.0, 15.0, 60.0, 70.0)
        .with_surface(80, 80)
        .build();
    let inverted = TestCanvasBuilder::new()
        .with_rect(60.0, 70.0, 10.0, 15.0)
        .with_surface(80, 80)
        .build();

    assert_eq!(
        normal.surface().unwrap().data(),
        inverted.surface().unwrap().data()
    );
}

#[test]
fn test_zero_area_background_is_skipped() {
    let red = RgbaImage::from_pixel(4, 4, Pixel([255, 0, 0, 255]));
    let mut canvas = TestCanvasBuilder::new().with_surface(60, 60).build();

    canvas.set_background(Some(Background::new(&red, 0.0, 0.0)));
    assert_eq!(alpha_at(&canvas, 5, 5), 0);

    canvas.set_background(Some(Background::new(&red, 40.0, 40.0)));
    let pixel = canvas.surface().unwrap().pixel(5, 5).unwrap();
    assert!(pixel[0] > 200 && pixel[1] < 50 && pixel[3] > 250);
    assert_eq!(alpha_at(&canvas, 50, 50), 0);
}

#[test]
fn test_rectangles_draw_over_background() {
    let white = RgbaImage::from_pixel(2, 2, Pixel([255, 255, 255, 255]));
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(10.0, 10.0, 50.0, 50.0)
        .with_surface(60, 60)
        .build();
    canvas.set_background(Some(Background::new(&white, 60.0, 60.0)));

    let over = canvas.surface().unwrap().pixel(30, 30).unwrap();
    let bare = canvas.surface().unwrap().pixel(55, 55).unwrap();
    assert!(bare.iter().all(|c| *c > 250));
    assert!(over[2] < 200, "fill should tint the background, got {over:?}");
}

#[test]
fn test_style_change_redraws() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(10.0, 10.0, 50.0, 50.0)
        .with_surface(60, 60)
        .build();
    let before = canvas.frames_rendered();

    let mut settings = Settings::default();
    settings.style.rect_fill = Rgba([0, 0, 255, 255]);
    canvas.apply_settings(settings).unwrap();

    assert_eq!(canvas.frames_rendered(), before + 1);
    assert_eq!(canvas.surface().unwrap().pixel(30, 30), Some([0, 0, 255, 255]));
}

#[test]
fn test_detach_and_export() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(10.0, 10.0, 50.0, 50.0)
        .with_surface(60, 60)
        .build();

    let surface = canvas.detach_surface().unwrap();
    let frames = canvas.frames_rendered();
    canvas.handle_event(PointerEvent::moved(11.0, 11.0));
    assert_eq!(canvas.frames_rendered(), frames);

    let exported = surface.to_rgba_image();
    assert_eq!(exported.dimensions(), (60, 60));
    assert_eq!(exported.get_pixel(30, 30).0, surface.pixel(30, 30).unwrap());

    canvas.attach_surface(Surface::new(30, 30).unwrap());
    assert_eq!(canvas.frames_rendered(), frames + 1);
}
