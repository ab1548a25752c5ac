#![allow(clippy::float_cmp)]

use serde_json::Value;

use super::*;
use crate::transform::Matrix;

fn shape() -> Shape {
    Shape::new(BoundingBox::new(0.1, 0.1, 0.2, 0.1))
}

fn transform_string(props: &RenderProps) -> String {
    props.path.transform.as_ref().map(ToString::to_string).unwrap_or_default()
}

// =============================================================
// Snapshot properties
// =============================================================

#[test]
fn new_shape_is_unrotated() {
    let s = shape();
    assert_eq!(s.rotation(), Rotation::Deg0);
    assert!(s.rotation_transform().is_identity());
    assert_eq!(s.path_data(), UNIT_SQUARE_PATH);
}

#[test]
fn render_properties_full_snapshot() {
    let s = Shape::new(BoundingBox::new(0.25, 0.5, 0.125, 0.25));
    let props = s.render_properties();
    assert_eq!(props.view_box.as_deref(), Some("0.25 0.5 0.125 0.25"));
    assert_eq!(props.path.d, Some(UNIT_SQUARE_PATH));
    assert_eq!(props.path.transform_origin.as_deref(), Some("0.25 0.5"));
    assert_eq!(props.path.transform, Some(Transform::identity()));
    assert_eq!(props.bbox, Some(s.bbox()));
}

#[test]
fn default_properties_skip_path_data() {
    let props = shape().default_properties();
    assert_eq!(props.view_box.as_deref(), Some("0.1 0.1 0.2 0.1"));
    assert_eq!(props.path.d, None);
    assert_eq!(props.path.transform_origin.as_deref(), Some("0.1 0.1"));
    assert_eq!(props.path.transform, None);
}

#[test]
fn empty_shape_reports_empty() {
    assert!(Shape::new(BoundingBox::at(Point::new(0.5, 0.5))).is_empty());
    assert!(!shape().is_empty());
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn set_rotation_zero_is_identity() {
    let mut s = shape();
    s.set_rotation(Rotation::Deg180);
    let props = s.set_rotation(Rotation::Deg0);
    assert_eq!(props.path.transform, Some(Transform::identity()));
    let v = serde_json::to_value(&props).unwrap();
    assert_eq!(v["path"]["transform"], Value::Null);
}

#[test]
fn set_rotation_half_turn_matrix() {
    let mut s = Shape::new(BoundingBox::new(0.0, 0.0, 0.2, 0.1));
    let props = s.set_rotation(Rotation::Deg180);
    let m = props.path.transform.as_ref().and_then(Transform::matrix).unwrap();
    assert_eq!(m, Matrix { a: -1.0, b: 0.0, c: 0.0, d: -1.0, e: 0.2, f: 0.1 });
    assert_eq!(transform_string(&props), "matrix(-1 0 0 -1 0.2 0.1)");
}

#[test]
fn set_rotation_only_touches_transform() {
    let mut s = shape();
    let before = s.bbox();
    let props = s.set_rotation(Rotation::Deg90);
    assert_eq!(props.view_box, None);
    assert_eq!(props.path.d, None);
    assert_eq!(props.path.transform_origin, None);
    assert_eq!(props.bbox, None);
    assert_eq!(s.bbox(), before);
    assert_eq!(s.path_data(), UNIT_SQUARE_PATH);
    assert_eq!(s.rotation(), Rotation::Deg90);
}

#[test]
fn render_properties_follow_rotation() {
    let mut s = Shape::new(BoundingBox::new(0.0, 0.0, 0.2, 0.1));
    s.set_rotation(Rotation::Deg270);
    assert_eq!(transform_string(&s.render_properties()), "matrix(0 -0.5 2 0 0 0.1)");
}

// =============================================================
// Resize
// =============================================================

#[test]
fn preview_resize_scales_and_translates() {
    let s = shape();
    let props = s.preview_resize(BoundingBox::new(0.2, 0.1, 0.4, 0.05));
    assert_eq!(transform_string(&props), "scale(2 0.5) translate(0.1 0)");
    assert_eq!(props.path.transform_origin.as_deref(), Some("0.1 0.1"));
    assert_eq!(props.path.d, None);
    assert_eq!(props.view_box, None);
}

#[test]
fn preview_resize_does_not_mutate() {
    let s = shape();
    let before = s.clone();
    let _ = s.preview_resize(BoundingBox::new(0.5, 0.5, 0.4, 0.4));
    assert_eq!(s, before);
}

#[test]
fn preview_resize_keeps_rotation_first() {
    let mut s = shape();
    s.set_rotation(Rotation::Deg90);
    let props = s.preview_resize(BoundingBox::new(0.1, 0.1, 0.4, 0.2));
    assert_eq!(transform_string(&props), "matrix(0 0.5 -2 0 0.2 0) scale(2 2) translate(0 0)");
}

#[test]
fn commit_resize_stores_new_box() {
    let mut s = shape();
    s.set_rotation(Rotation::Deg180);
    let new = BoundingBox::new(0.3, 0.3, 0.4, 0.2);
    let props = s.commit_resize(new);
    assert_eq!(s.bbox(), new);
    assert_eq!(props.view_box.as_deref(), Some("0.3 0.3 0.4 0.2"));
    assert_eq!(props.path.d, Some(UNIT_SQUARE_PATH));
    assert_eq!(props.path.transform_origin.as_deref(), Some("0.3 0.3"));
    assert_eq!(transform_string(&props), "matrix(-1 0 0 -1 0.4 0.2)");
}

#[test]
fn commit_resize_unrotated_clears_transform() {
    let mut s = shape();
    let props = s.commit_resize(BoundingBox::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(props.path.transform, Some(Transform::identity()));
}

// =============================================================
// Translate
// =============================================================

#[test]
fn commit_translate_moves_origin() {
    let mut s = shape();
    let props = s.commit_translate(0.3, 0.4);
    let b = s.bbox();
    assert_eq!((b.x, b.y), (0.3, 0.4));
    assert_eq!((b.width, b.height), (0.2, 0.1));
    assert_eq!(transform_string(&props), "translate(0.2 0.3)");
    assert_eq!(props.path.transform_origin.as_deref(), Some("0.3 0.4"));
    assert_eq!(props.view_box.as_deref(), Some("0.3 0.4 0.2 0.1"));
    assert_eq!(props.path.d, Some(UNIT_SQUARE_PATH));
}

#[test]
fn commit_translate_keeps_rotation() {
    let mut s = shape();
    s.set_rotation(Rotation::Deg90);
    let props = s.commit_translate(0.1, 0.2);
    assert_eq!(transform_string(&props), "matrix(0 0.5 -2 0 0.2 0) translate(0 0.1)");
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn clones_do_not_share_box() {
    let mut a = shape();
    let b = a.clone();
    a.commit_resize(BoundingBox::new(0.5, 0.5, 0.5, 0.5));
    assert_eq!(b.bbox(), BoundingBox::new(0.1, 0.1, 0.2, 0.1));
}

#[test]
fn parent_resize_keeps_box() {
    let s = shape();
    assert_eq!(s.on_parent_resize(1920.0, 1080.0), s.bbox());
    assert_eq!(s.origin(), Point::new(0.1, 0.1));
}
