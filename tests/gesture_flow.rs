//! End-to-end flows: pointer gesture → committed shape → page record.

use boxdraw::{BoundingBox, DrawGesture, PageBox, Rotation, Surface};

const EPSILON: f64 = 1e-9;

fn assert_rect(actual: [f64; 4], expected: [f64; 4]) {
    let close = actual.iter().zip(expected).all(|(a, e)| (a - e).abs() < EPSILON);
    assert!(close, "rect {actual:?} != {expected:?}");
}

#[test]
fn drag_on_unrotated_surface() {
    let surface = Surface::new(800.0, 600.0, Rotation::Deg0);
    let mut g = DrawGesture::new(200.0, 150.0, surface);
    g.add_sample(400.0, 300.0);
    g.add_sample(600.0, 450.0);
    g.finalize(600.0, 450.0);
    assert!(!g.is_cancellable());

    let shape = g.to_shape();
    assert_eq!(shape.bbox(), BoundingBox::new(0.25, 0.25, 0.5, 0.5));

    let record = shape.serialize(PageBox::new(0.0, 0.0, 800.0, 600.0), false);
    assert_rect(record.rect, [200.0, 150.0, 600.0, 450.0]);
    assert_eq!(record.points[0].len(), 8);
    assert_eq!(record.outline.len(), 24);
}

#[test]
fn drag_on_quarter_turned_surface() {
    let surface = Surface::new(800.0, 600.0, Rotation::Deg90);
    let mut g = DrawGesture::new(150.0, 200.0, surface);
    g.finalize(450.0, 600.0);

    let mut shape = g.to_shape();
    assert_eq!(shape.bbox(), BoundingBox::new(0.25, 0.25, 0.5, 0.5));
    let props = shape.set_rotation(surface.rotation);
    assert!(props.transform_attr().is_some_and(|t| t.starts_with("matrix(")));

    let record = shape.serialize(PageBox::new(0.0, 0.0, 600.0, 800.0), true);
    assert_rect(record.rect, [150.0, 200.0, 450.0, 600.0]);
}

#[test]
fn click_becomes_default_square() {
    let surface = Surface::new(1000.0, 1000.0, Rotation::Deg0);
    let mut g = DrawGesture::new(500.0, 500.0, surface);
    let props = g.finalize(500.0, 500.0);
    assert!(g.is_cancellable());
    assert!(!g.is_empty());
    assert_eq!(props.bbox, Some(g.bbox()));

    let record = g.to_shape().serialize(PageBox::new(0.0, 0.0, 1000.0, 1000.0), false);
    assert_rect(record.rect, [500.0, 400.0, 600.0, 500.0]);
}

#[test]
fn edit_cycle_then_serialize() {
    let surface = Surface::new(1000.0, 1000.0, Rotation::Deg0);
    let mut g = DrawGesture::new(250.0, 250.0, surface);
    g.finalize(500.0, 500.0);
    let mut shape = g.to_shape();
    assert_eq!(shape.bbox(), BoundingBox::new(0.25, 0.25, 0.25, 0.25));

    let target = BoundingBox::new(0.25, 0.25, 0.5, 0.5);
    let preview = shape.preview_resize(target);
    assert_eq!(preview.transform_attr().as_deref(), Some("scale(2 2) translate(0 0)"));
    shape.commit_resize(target);
    shape.commit_translate(0.5, 0.25);

    let record = shape.serialize(PageBox::new(0.0, 0.0, 100.0, 100.0), false);
    assert_rect(record.rect, [50.0, 25.0, 100.0, 75.0]);
}

#[test]
fn cancelled_gesture_can_be_restarted() {
    let surface = Surface::new(1024.0, 1024.0, Rotation::Deg0);
    let mut g = DrawGesture::new(10.0, 10.0, surface);
    g.add_sample(11.0, 11.0);
    assert!(g.is_cancellable());

    g.restart(512.0, 512.0, Surface::new(1024.0, 1024.0, Rotation::Deg180));
    g.finalize(256.0, 256.0);
    assert!(!g.is_cancellable());
    assert_eq!(g.bbox(), BoundingBox::new(0.5, 0.5, 0.25, 0.25));
}
