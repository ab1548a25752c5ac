//! Shape serialization into absolute page coordinates.
//!
//! Boxes are stored in the normalized local frame of the (possibly rotated)
//! surface. Persisting one means mapping its corners through the affine map
//! for the shape's current rotation, `(u, v) → (tx + u·sx, ty + v·sy)`, with
//! the axes swapped for 90° and 270°. Page space has its y axis pointing up,
//! hence the negative `sy` for the unrotated case.

#[cfg(test)]
#[path = "serialize_test.rs"]
mod serialize_test;

use serde::Serialize;

use crate::consts::OUTLINE_MARKER;
use crate::geom::{
    BoundingBox, PageBox, Rotation, rescale, rescale_and_swap, rescale_and_swap_in_place, rescale_in_place,
};
use crate::shape::Shape;

/// Affine map from normalized local space into page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMap {
    pub tx: f64,
    pub ty: f64,
    pub sx: f64,
    pub sy: f64,
    /// Swap each point's axes before scaling.
    pub swap: bool,
}

impl PageMap {
    #[must_use]
    pub fn new(rotation: Rotation, page: PageBox) -> Self {
        let PageBox { x, y, width, height } = page;
        match rotation {
            Rotation::Deg0 => Self { tx: x, ty: y + height, sx: width, sy: -height, swap: false },
            Rotation::Deg90 => Self { tx: x, ty: y, sx: width, sy: height, swap: true },
            Rotation::Deg180 => Self { tx: x + width, ty: y, sx: -width, sy: height, swap: false },
            Rotation::Deg270 => Self { tx: x + width, ty: y + height, sx: -width, sy: -height, swap: true },
        }
    }

    /// Map `src` into `out`, leaving `src` untouched.
    pub fn map_into(&self, src: &[f64], out: &mut [f64]) {
        let Self { tx, ty, sx, sy, swap } = *self;
        if swap {
            rescale_and_swap(src, tx, ty, sx, sy, out);
        } else {
            rescale(src, tx, ty, sx, sy, out);
        }
    }

    /// Map `points` in place.
    pub fn map_in_place(&self, points: &mut [f64]) {
        let Self { tx, ty, sx, sy, swap } = *self;
        if swap {
            rescale_and_swap_in_place(points, tx, ty, sx, sy);
        } else {
            rescale_in_place(points, tx, ty, sx, sy);
        }
    }

    /// Map `points`, either into a fresh buffer (`copy`) or reusing the input.
    #[must_use]
    pub fn map(&self, mut points: Vec<f64>, copy: bool) -> Vec<f64> {
        if copy {
            let mut out = vec![0.0; points.len()];
            self.map_into(&points, &mut out);
            out
        } else {
            self.map_in_place(&mut points);
            points
        }
    }
}

/// Absolute `[x1, y1, x2, y2]` of `bbox` on `page` under `rotation`.
#[must_use]
pub fn page_rect(bbox: &BoundingBox, rotation: Rotation, page: PageBox) -> [f64; 4] {
    let BoundingBox { x, y, width: w, height: h } = *bbox;
    let PageBox { x: px, y: py, width: pw, height: ph } = page;
    match rotation {
        Rotation::Deg0 => [px + x * pw, py + (1.0 - y - h) * ph, px + (x + w) * pw, py + (1.0 - y) * ph],
        Rotation::Deg90 => [px + y * pw, py + x * ph, px + (y + h) * pw, py + (x + w) * ph],
        Rotation::Deg180 => [px + (1.0 - x - w) * pw, py + y * ph, px + (1.0 - x) * pw, py + (y + h) * ph],
        Rotation::Deg270 => {
            [px + (1.0 - y - h) * pw, py + (1.0 - x - w) * ph, px + (1.0 - y) * pw, py + (1.0 - x) * ph]
        }
    }
}

/// Corners with a move-to marker before each, so the outline draws as four
/// separate segments.
fn outline_points(corners: &[f64; 8]) -> Vec<f64> {
    let mut out = Vec::with_capacity(24);
    for corner in corners.chunks_exact(2) {
        out.extend_from_slice(&OUTLINE_MARKER);
        out.extend_from_slice(corner);
    }
    out
}

/// A shape in absolute page units, ready to embed in a document entry.
///
/// NaN markers in `outline` serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct SerializedBox {
    pub lines: Vec<Vec<f64>>,
    pub points: Vec<Vec<f64>>,
    pub outline: Vec<f64>,
    pub rect: [f64; 4],
}

impl Shape {
    /// Map the box onto `page` under the current rotation.
    ///
    /// With `for_copy` every output lives in its own freshly allocated
    /// buffer; otherwise the intermediate corner buffers are reused.
    #[must_use]
    pub fn serialize(&self, page: PageBox, for_copy: bool) -> SerializedBox {
        let bbox = self.bbox();
        let rotation = self.rotation();
        let map = PageMap::new(rotation, page);
        let corners = bbox.corners();

        let points = map.map(corners.to_vec(), for_copy);
        let outline = map.map(outline_points(&corners), for_copy);
        let rect = page_rect(&bbox, rotation, page);

        tracing::debug!(rotation = rotation.degrees(), for_copy, ?rect, "shape serialized");
        SerializedBox { lines: vec![outline.clone()], points: vec![points], outline, rect }
    }
}
