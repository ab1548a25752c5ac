//! Geometry primitives: points, boxes, rotations, surfaces, and the point
//! mapping helpers shared by gestures and serialization.
//!
//! Boxes live in a normalized local frame where both axes run over `[0, 1]`
//! regardless of the surface's pixel size or rotation. Conversion into that
//! frame happens once, in [`normalize_point`]; conversion back out to
//! absolute page units happens in [`crate::serialize`] through [`rescale`]
//! and [`rescale_and_swap`].

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::DISPLAY_PRECISION;
use crate::error::BoxDrawError;

/// A point in either pixel or normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in normalized local space.
///
/// On the wire this is the 4-element array `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-size box at `p`.
    #[must_use]
    pub fn at(p: Point) -> Self {
        Self { x: p.x, y: p.y, width: 0.0, height: 0.0 }
    }

    /// Smallest box spanning `a` and `b`, with each side clamped to `[0, 1]`.
    #[must_use]
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs().clamp(0.0, 1.0),
            height: (b.y - a.y).abs().clamp(0.0, 1.0),
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` when the box has no extent in either axis.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Corners clockwise from the top-left, flattened as `x, y` pairs.
    #[must_use]
    pub fn corners(&self) -> [f64; 8] {
        let Self { x, y, width, height } = *self;
        [x, y, x + width, y, x + width, y + height, x, y + height]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

/// Cardinal rotation of a surface, clockwise.
///
/// Serialized as integer degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Lenient conversion: anything other than 90, 180 or 270 is treated as 0.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        match Self::try_from(degrees) {
            Ok(rotation) => rotation,
            Err(_) => {
                tracing::debug!(degrees, "non-cardinal rotation, using 0");
                Self::Deg0
            }
        }
    }

    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether the local x axis maps onto the page's y axis.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = BoxDrawError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(BoxDrawError::InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// The drawing surface a gesture runs on: pixel size plus rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Surface {
    /// Unchecked constructor. Callers must pass positive sizes.
    #[must_use]
    pub fn new(width: f64, height: f64, rotation: Rotation) -> Self {
        Self { width, height, rotation }
    }

    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`BoxDrawError::InvalidSurface`] when either side is not a
    /// positive finite number.
    pub fn try_new(width: f64, height: f64, rotation: Rotation) -> Result<Self, BoxDrawError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height, rotation })
        } else {
            Err(BoxDrawError::InvalidSurface { width, height })
        }
    }

    /// Size of `bbox` on this surface, in pixels.
    #[must_use]
    pub fn pixel_extent(&self, bbox: &BoundingBox) -> (f64, f64) {
        (bbox.width * self.width, bbox.height * self.height)
    }
}

/// Absolute page box `[x, y, width, height]` that serialized shapes map into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct PageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl From<[f64; 4]> for PageBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<PageBox> for [f64; 4] {
    fn from(p: PageBox) -> Self {
        [p.x, p.y, p.width, p.height]
    }
}

// =============================================================
// Point mapping
// =============================================================

/// Map a pixel position on `surface` into the normalized local frame.
///
/// This is the inverse of the per-rotation table used by serialization.
/// The result is clamped into `[0, 1]` on both axes, so pointer positions
/// outside the surface pin to its edge.
#[must_use]
pub fn normalize_point(x: f64, y: f64, surface: &Surface) -> Point {
    let Surface { width, height, rotation } = *surface;
    let (u, v) = match rotation {
        Rotation::Deg0 => (x / width, y / height),
        Rotation::Deg90 => (1.0 - y / width, x / height),
        Rotation::Deg180 => (1.0 - x / width, 1.0 - y / height),
        Rotation::Deg270 => (y / width, 1.0 - x / height),
    };
    Point::new(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
}

/// Write `(tx + u * sx, ty + v * sy)` for every `u, v` pair of `src` into `out`.
///
/// Pairs beyond the shorter of the two buffers are left untouched. NaN
/// entries stay NaN.
pub fn rescale(src: &[f64], tx: f64, ty: f64, sx: f64, sy: f64, out: &mut [f64]) {
    for (s, o) in src.chunks_exact(2).zip(out.chunks_exact_mut(2)) {
        o[0] = tx + s[0] * sx;
        o[1] = ty + s[1] * sy;
    }
}

/// Like [`rescale`], but swaps each pair first: `(tx + v * sx, ty + u * sy)`.
pub fn rescale_and_swap(src: &[f64], tx: f64, ty: f64, sx: f64, sy: f64, out: &mut [f64]) {
    for (s, o) in src.chunks_exact(2).zip(out.chunks_exact_mut(2)) {
        o[0] = tx + s[1] * sx;
        o[1] = ty + s[0] * sy;
    }
}

/// In-place form of [`rescale`].
pub fn rescale_in_place(points: &mut [f64], tx: f64, ty: f64, sx: f64, sy: f64) {
    for p in points.chunks_exact_mut(2) {
        p[0] = tx + p[0] * sx;
        p[1] = ty + p[1] * sy;
    }
}

/// In-place form of [`rescale_and_swap`].
pub fn rescale_and_swap_in_place(points: &mut [f64], tx: f64, ty: f64, sx: f64, sy: f64) {
    for p in points.chunks_exact_mut(2) {
        let (u, v) = (p[0], p[1]);
        p[0] = tx + v * sx;
        p[1] = ty + u * sy;
    }
}

// =============================================================
// Display rounding
// =============================================================

/// Round to four decimal places, halves toward positive infinity.
#[must_use]
pub fn round_for_display(n: f64) -> f64 {
    (n * DISPLAY_PRECISION + 0.5).floor() / DISPLAY_PRECISION
}

/// Shortest decimal form of `n`, with negative zero printed as `0`.
#[must_use]
pub fn fmt_number(n: f64) -> String {
    if n == 0.0 { "0".to_string() } else { n.to_string() }
}

/// [`round_for_display`] then [`fmt_number`].
#[must_use]
pub fn fmt_display(n: f64) -> String {
    fmt_number(round_for_display(n))
}

/// `"x y width height"` with every value display-rounded.
#[must_use]
pub fn view_box(bbox: &BoundingBox) -> String {
    <[f64; 4]>::from(*bbox)
        .iter()
        .map(|v| fmt_display(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"x y"` with both values display-rounded.
#[must_use]
pub fn fmt_origin(p: Point) -> String {
    format!("{} {}", fmt_display(p.x), fmt_display(p.y))
}
