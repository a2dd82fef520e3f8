//! Resize gesture: hover a corner, press, drag, release.

use crate::helpers::{
    TestCanvasBuilder, drag, drag_out, drag_through, rect, record_notifications,
};
use annoboard::settings::Settings;
use annoboard::{Corner, CornerRef, PointerEvent};

fn square_canvas() -> annoboard::AnnotationCanvas {
    TestCanvasBuilder::new().with_rect(0.0, 0.0, 100.0, 100.0).build()
}

#[test]
fn test_hover_tracks_corner_and_rectangle() {
    let mut canvas = square_canvas();

    canvas.handle_event(PointerEvent::moved(97.0, 3.0));
    assert_eq!(canvas.hovered_corner(), Some(CornerRef::new(0, Corner::P1)));
    assert_eq!(canvas.marker_position(), Some(annoboard::Coordinate::new(100.0, 0.0)));

    canvas.handle_event(PointerEvent::moved(50.0, 50.0));
    assert_eq!(canvas.hovered_corner(), None);
    assert_eq!(canvas.hovered_rectangle(), Some(0));

    canvas.handle_event(PointerEvent::moved(150.0, 50.0));
    assert_eq!(canvas.hovered_rectangle(), None);
}

#[test]
fn test_hovered_rectangle_is_topmost() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(0.0, 0.0, 100.0, 100.0)
        .with_rect(50.0, 50.0, 150.0, 150.0)
        .build();
    canvas.handle_event(PointerEvent::moved(75.0, 75.0));
    assert_eq!(canvas.hovered_rectangle(), Some(1));
}

#[test]
fn test_corner_one_toward_top_right() {
    let mut canvas = square_canvas();
    let log = record_notifications(&mut canvas);

    drag(&mut canvas, (100.0, 0.0), (150.0, 20.0));

    assert_eq!(canvas.rectangles(), &[rect(0.0, 20.0, 150.0, 100.0)]);
    // One payload for the move, one for the final mutation on release
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|(_, rects)| rects == &vec![rect(0.0, 20.0, 150.0, 100.0)]));
}

#[test]
fn test_every_move_mutates_and_notifies() {
    let mut canvas = square_canvas();
    let log = record_notifications(&mut canvas);

    canvas.handle_events([PointerEvent::moved(2.0, 2.0), PointerEvent::down(2.0, 2.0)]);
    assert!(canvas.input_state().is_resizing());
    assert_eq!(canvas.hovered_corner(), None);
    assert!(log.borrow().is_empty());

    canvas.handle_event(PointerEvent::moved(10.0, 15.0));
    assert_eq!(canvas.rectangles()[0], rect(10.0, 15.0, 100.0, 100.0));
    canvas.handle_event(PointerEvent::moved(30.0, 40.0));
    assert_eq!(canvas.rectangles()[0], rect(30.0, 40.0, 100.0, 100.0));
    assert_eq!(log.borrow().len(), 2);

    canvas.handle_event(PointerEvent::up(30.0, 40.0));
    assert_eq!(log.borrow().len(), 3);
    assert!(canvas.input_state().is_idle());
}

#[test]
fn test_each_corner_follows_pointer() {
    let cases = [
        ((0.0, 0.0), rect(-20.0, 130.0, 100.0, 100.0)),
        ((100.0, 0.0), rect(0.0, 130.0, -20.0, 100.0)),
        ((100.0, 100.0), rect(0.0, 0.0, -20.0, 130.0)),
        ((0.0, 100.0), rect(-20.0, 0.0, 100.0, 130.0)),
    ];
    for (start, expected) in cases {
        let mut canvas = square_canvas();
        drag(&mut canvas, start, (-20.0, 130.0));
        assert_eq!(canvas.rectangles()[0], expected, "dragging from {start:?}");
    }
}

#[test]
fn test_release_rescans_hover() {
    let mut canvas = square_canvas();
    drag(&mut canvas, (100.0, 0.0), (150.0, 20.0));
    // The dragged corner is under the pointer again
    assert_eq!(canvas.hovered_corner(), Some(CornerRef::new(0, Corner::P1)));
}

#[test]
fn test_leave_finishes_resize_like_release() {
    let path = [(100.0, 100.0), (120.0, 110.0), (140.0, 160.0)];

    let mut released = square_canvas();
    let released_log = record_notifications(&mut released);
    drag_through(&mut released, &path);

    let mut left = square_canvas();
    let left_log = record_notifications(&mut left);
    drag_out(&mut left, &path);

    assert_eq!(left.rectangles(), released.rectangles());
    assert_eq!(left.rectangles(), &[rect(0.0, 0.0, 140.0, 160.0)]);
    assert_eq!(*left_log.borrow(), *released_log.borrow());
    assert!(left.input_state().is_idle());
    assert_eq!(left.hovered_corner(), None);
    assert_eq!(left.hovered_rectangle(), None);
}

#[test]
fn test_shared_corner_goes_to_first_rectangle() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(0.0, 0.0, 50.0, 50.0)
        .with_rect(50.0, 50.0, 120.0, 120.0)
        .build();

    drag(&mut canvas, (50.0, 50.0), (60.0, 70.0));

    assert_eq!(canvas.rectangles()[0], rect(0.0, 0.0, 60.0, 70.0));
    assert_eq!(canvas.rectangles()[1], rect(50.0, 50.0, 120.0, 120.0));
}

#[test]
fn test_resize_never_commits_new_rectangle() {
    let mut canvas = square_canvas();
    drag(&mut canvas, (0.0, 0.0), (1.0, 1.0));
    assert_eq!(canvas.rectangles().len(), 1);
}

#[test]
fn test_proximity_comes_from_settings() {
    let settings = Settings {
        proximity_threshold: 3.0,
        ..Settings::default()
    };
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(0.0, 0.0, 100.0, 100.0)
        .with_settings(settings)
        .build();

    canvas.handle_event(PointerEvent::moved(95.0, 5.0));
    assert_eq!(canvas.hovered_corner(), None);
    canvas.handle_event(PointerEvent::moved(98.0, 2.0));
    assert_eq!(canvas.hovered_corner(), Some(CornerRef::new(0, Corner::P1)));

    canvas.apply_settings(Settings::default()).unwrap();
    canvas.handle_event(PointerEvent::moved(95.0, 5.0));
    assert!(canvas.hovered_corner().is_some());
}

#[test]
fn test_leave_forgets_pointer_for_later_settings_changes() {
    let mut canvas = TestCanvasBuilder::new()
        .with_rect(0.0, 0.0, 100.0, 100.0)
        .with_settings(Settings {
            proximity_threshold: 1.0,
            ..Settings::default()
        })
        .with_surface(120, 120)
        .build();

    canvas.handle_event(PointerEvent::moved(98.0, 2.0));
    assert_eq!(canvas.hovered_corner(), None);
    canvas.handle_event(PointerEvent::Leave);

    canvas
        .apply_settings(Settings {
            proximity_threshold: 12.0,
            ..Settings::default()
        })
        .unwrap();

    assert_eq!(canvas.hovered_corner(), None);
    assert_eq!(canvas.marker_position(), None);
    assert_eq!(canvas.snapshot().pointer, None);
}

#[test]
fn test_unsubscribed_observer_gets_nothing() {
    let mut canvas = square_canvas();
    let log = std::rc::Rc::new(std::cell::RefCell::new(0usize));
    let sink = std::rc::Rc::clone(&log);
    let id = canvas.subscribe(move |_: &annoboard::ImageId, _: &[annoboard::Rectangle]| {
        *sink.borrow_mut() += 1;
    });
    assert!(canvas.unsubscribe(id));
    assert!(!canvas.unsubscribe(id));

    drag(&mut canvas, (100.0, 100.0), (120.0, 120.0));
    assert_eq!(*log.borrow(), 0);
}
