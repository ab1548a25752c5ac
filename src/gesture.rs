//! Draw gesture: the transient state of one pointer-down → move → up drag.
//!
//! The host creates a [`DrawGesture`] on pointer-down, feeds it every
//! pointer-move through [`DrawGesture::add_sample`], and on pointer-up calls
//! [`DrawGesture::finalize`] followed by [`DrawGesture::to_shape`]. Dropping
//! the gesture without converting it cancels the drawing; nothing else needs
//! cleaning up.
//!
//! Every sample produces a [`RenderProps`] whose path is the constant unit
//! square. Only the view box changes while dragging, so the render layer
//! never has to rebuild path geometry.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::DrawConfig;
use crate::geom::{BoundingBox, Point, Surface, normalize_point};
use crate::render::RenderProps;
use crate::shape::Shape;

/// Live state of a box being drawn.
#[derive(Debug, Clone)]
pub struct DrawGesture {
    /// Normalized start corner.
    anchor: Point,
    /// Surface size and rotation at the most recent (re)start.
    surface: Surface,
    /// Current box, possibly snapped by `finalize`.
    bbox: BoundingBox,
    /// Box spanned by the last sample, never snapped.
    drag: BoundingBox,
    config: DrawConfig,
}

impl DrawGesture {
    /// Start a gesture at pixel `(x, y)` with the default config.
    #[must_use]
    pub fn new(x: f64, y: f64, surface: Surface) -> Self {
        Self::with_config(x, y, surface, DrawConfig::default())
    }

    #[must_use]
    pub fn with_config(x: f64, y: f64, surface: Surface, config: DrawConfig) -> Self {
        let anchor = normalize_point(x, y, &surface);
        tracing::debug!(x, y, anchor_x = anchor.x, anchor_y = anchor.y, rotation = surface.rotation.degrees(), "draw gesture started");
        let bbox = BoundingBox::at(anchor);
        Self { anchor, surface, bbox, drag: bbox, config }
    }

    /// Re-anchor this gesture for a new box, possibly on a different surface.
    pub fn restart(&mut self, x: f64, y: f64, surface: Surface) {
        self.surface = surface;
        self.anchor = normalize_point(x, y, &surface);
        self.bbox = BoundingBox::at(self.anchor);
        self.drag = self.bbox;
        tracing::debug!(x, y, anchor_x = self.anchor.x, anchor_y = self.anchor.y, "draw gesture restarted");
    }

    /// Extend the box from the anchor to pixel `(x, y)`.
    pub fn add_sample(&mut self, x: f64, y: f64) -> RenderProps {
        let p = normalize_point(x, y, &self.surface);
        self.bbox = BoundingBox::spanning(self.anchor, p);
        self.drag = self.bbox;
        tracing::trace!(x, y, width = self.bbox.width, height = self.bbox.height, "draw sample");
        RenderProps::outline(self.bbox)
    }

    /// Apply the final sample. A gesture that never grew past the click
    /// threshold snaps to a default square anchored at the start point,
    /// pushed inward so it stays on the surface.
    pub fn finalize(&mut self, x: f64, y: f64) -> RenderProps {
        let change = self.add_sample(x, y);
        if !self.is_cancellable() {
            tracing::debug!(width = self.bbox.width, height = self.bbox.height, snapped = false, "draw gesture finalized");
            return change;
        }

        let side_x = (self.config.click_side_px / self.surface.width).min(1.0);
        let side_y = (self.config.click_side_px / self.surface.height).min(1.0);
        let x = self.anchor.x.min(1.0 - side_x).max(0.0);
        let y = self.anchor.y.min(1.0 - side_y).max(0.0);
        self.bbox = BoundingBox::new(x, y, side_x, side_y);
        tracing::debug!(x, y, width = side_x, height = side_y, snapped = true, "draw gesture finalized");
        RenderProps::outline(self.bbox)
    }

    /// Whether the drag so far is small enough to be an accidental click.
    ///
    /// Looks at the box spanned by the last sample, before any snapping.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        let (w, h) = self.surface.pixel_extent(&self.drag);
        let limit = self.config.cancel_threshold_px;
        w <= limit && h <= limit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bbox.is_empty()
    }

    /// Commit the current box as a [`Shape`]. The gesture is left as is.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        Shape::new(self.bbox)
    }

    /// Descriptor for the current box without taking a new sample.
    #[must_use]
    pub fn default_render_properties(&self) -> RenderProps {
        RenderProps::outline(self.bbox)
    }

    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn config(&self) -> DrawConfig {
        self.config
    }
}
