//! Geometry engine for box-shaped annotations.
//!
//! A pointer drag on a (possibly rotated) surface becomes a box in a
//! normalized `[0, 1] × [0, 1]` frame. The box renders as a constant unit
//! square placed by a view box and a transform chain, so resizing, moving or
//! rotating it never rebuilds path geometry. Committed boxes serialize into
//! absolute page coordinates for all four cardinal rotations.
//!
//! The host editor owns event dispatch, selection, undo and styling. It
//! drives a [`gesture::DrawGesture`] while the pointer is down, turns it into
//! a [`shape::Shape`] on release, and pushes the returned
//! [`render::RenderProps`] to its render layer verbatim.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gesture`] | Drag state, click snapping, cancel detection |
//! | [`shape`] | Committed box: rotation, resize and translate updates |
//! | [`serialize`] | Mapping a shape into absolute page coordinates |
//! | [`render`] | Render descriptors for the presentation layer |
//! | [`transform`] | Typed SVG transform chains |
//! | [`geom`] | Points, boxes, rotations, point mapping, display rounding |
//! | [`config`] | Click-size and cancel-threshold settings |
//! | [`error`] | Error type for checked entry points |
//! | [`consts`] | Shared constants (unit path, default thresholds) |

pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod gesture;
pub mod render;
pub mod serialize;
pub mod shape;
pub mod transform;

pub use config::DrawConfig;
pub use error::BoxDrawError;
pub use geom::{BoundingBox, PageBox, Point, Rotation, Surface};
pub use gesture::DrawGesture;
pub use render::{PathProps, RenderProps};
pub use serialize::SerializedBox;
pub use shape::Shape;
pub use transform::Transform;
