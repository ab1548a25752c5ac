//! Render descriptors handed to the presentation layer.
//!
//! The presentation layer applies `viewBox` to the SVG root and `path` to a
//! single path element verbatim. Fields left as `None` are omitted, meaning
//! "leave the attribute as it is".

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::UNIT_SQUARE_PATH;
use crate::geom::{BoundingBox, fmt_origin, view_box};
use crate::transform::Transform;

/// Attributes for the box's path element.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathProps {
    /// Path data. Always [`UNIT_SQUARE_PATH`] when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<&'static str>,
    #[serde(rename = "transform-origin", skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

/// One update for the render layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderProps {
    #[serde(rename = "viewBox", skip_serializing_if = "Option::is_none")]
    pub view_box: Option<String>,
    pub path: PathProps,
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl RenderProps {
    /// View box, unit-square path and raw box: the live drawing descriptor.
    #[must_use]
    pub fn outline(bbox: BoundingBox) -> Self {
        Self {
            view_box: Some(view_box(&bbox)),
            path: PathProps { d: Some(UNIT_SQUARE_PATH), ..PathProps::default() },
            bbox: Some(bbox),
        }
    }

    /// View box plus a fully placed path: origin at the box's top-left and
    /// the given transform.
    #[must_use]
    pub fn placed(bbox: BoundingBox, transform: Transform) -> Self {
        Self {
            view_box: Some(view_box(&bbox)),
            path: PathProps {
                d: Some(UNIT_SQUARE_PATH),
                transform_origin: Some(fmt_origin(bbox.origin())),
                transform: Some(transform),
            },
            bbox: None,
        }
    }

    /// Attach the raw box.
    #[must_use]
    pub fn with_box(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// The transform attribute as the render layer will see it, if set.
    #[must_use]
    pub fn transform_attr(&self) -> Option<String> {
        self.path.transform.as_ref().filter(|t| !t.is_identity()).map(ToString::to_string)
    }
}
