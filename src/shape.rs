//! Committed box shape: placement, rotation, and resize/translate updates.
//!
//! A [`Shape`] owns exactly one [`BoundingBox`] and one [`Rotation`]. The
//! path it renders is always the unit square; every update, whether a live
//! preview or a commit, is expressed through the view box, the transform
//! origin and the transform chain.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::consts::UNIT_SQUARE_PATH;
use crate::geom::{BoundingBox, Point, Rotation, fmt_origin, view_box};
use crate::render::{PathProps, RenderProps};
use crate::transform::Transform;

/// A committed box annotation in normalized local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    bbox: BoundingBox,
    rotation: Rotation,
}

impl Shape {
    /// New unrotated shape holding `bbox`.
    #[must_use]
    pub fn new(bbox: BoundingBox) -> Self {
        Self { bbox, rotation: Rotation::Deg0 }
    }

    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bbox.is_empty()
    }

    #[must_use]
    pub fn path_data(&self) -> &'static str {
        UNIT_SQUARE_PATH
    }

    #[must_use]
    pub fn view_box(&self) -> String {
        view_box(&self.bbox)
    }

    /// Current rotation re-orientation, evaluated at the stored size.
    #[must_use]
    pub fn rotation_transform(&self) -> Transform {
        Transform::rotation(self.rotation, self.bbox.width, self.bbox.height)
    }

    /// Full snapshot for the render layer.
    #[must_use]
    pub fn render_properties(&self) -> RenderProps {
        RenderProps::placed(self.bbox, self.rotation_transform()).with_box(self.bbox)
    }

    /// Initial placement only: view box and transform origin, no path data.
    #[must_use]
    pub fn default_properties(&self) -> RenderProps {
        RenderProps {
            view_box: Some(self.view_box()),
            path: PathProps { transform_origin: Some(fmt_origin(self.bbox.origin())), ..PathProps::default() },
            bbox: None,
        }
    }

    /// Store a new rotation. Only the transform changes.
    pub fn set_rotation(&mut self, rotation: Rotation) -> RenderProps {
        self.rotation = rotation;
        tracing::debug!(rotation = rotation.degrees(), "shape rotation set");
        RenderProps {
            path: PathProps { transform: Some(self.rotation_transform()), ..PathProps::default() },
            ..RenderProps::default()
        }
    }

    /// Live feedback for a resize in progress. The stored box is untouched;
    /// the new placement is expressed as a scale and translate relative to it.
    #[must_use]
    pub fn preview_resize(&self, new: BoundingBox) -> RenderProps {
        let old = self.bbox;
        let transform = self
            .rotation_transform()
            .scale(new.width / old.width, new.height / old.height)
            .translate(new.x - old.x, new.y - old.y);
        RenderProps {
            path: PathProps {
                transform_origin: Some(fmt_origin(old.origin())),
                transform: Some(transform),
                ..PathProps::default()
            },
            ..RenderProps::default()
        }
    }

    /// Store `new` as the box and return its authoritative placement.
    pub fn commit_resize(&mut self, new: BoundingBox) -> RenderProps {
        self.bbox = new;
        tracing::debug!(x = new.x, y = new.y, width = new.width, height = new.height, "shape resized");
        RenderProps::placed(self.bbox, self.rotation_transform())
    }

    /// Move the box origin to `(x, y)`.
    ///
    /// The returned transform carries the offset from the previous origin.
    pub fn commit_translate(&mut self, x: f64, y: f64) -> RenderProps {
        let old = self.bbox.origin();
        self.bbox.x = x;
        self.bbox.y = y;
        tracing::debug!(x, y, dx = x - old.x, dy = y - old.y, "shape translated");
        let transform = self.rotation_transform().translate(x - old.x, y - old.y);
        RenderProps::placed(self.bbox, transform)
    }

    /// The box is resolution independent, so a parent resize leaves it as is.
    #[must_use]
    pub fn on_parent_resize(&self, _width: f64, _height: f64) -> BoundingBox {
        self.bbox
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bbox.origin()
    }
}
