//! SVG placement transforms for box shapes.
//!
//! A box never changes its path; rotation, live resizing and translation are
//! all expressed as a chain of transform ops applied to the constant unit
//! square. [`Transform`] keeps that chain typed so callers can inspect the
//! matrix parameters, and renders it to the SVG attribute string on demand.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::geom::{Rotation, fmt_display, fmt_number};

/// 2×3 affine matrix `[a b c d e f]` as used by SVG `matrix(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// Matrix that re-orients a `width × height` box for `rotation`, or
    /// `None` when no re-orientation is needed.
    ///
    /// `e` and `f` are in the box's own local units.
    #[must_use]
    pub fn for_rotation(rotation: Rotation, width: f64, height: f64) -> Option<Self> {
        let zero = Self { a: 0.0, b: 0.0, c: 0.0, d: 0.0, e: 0.0, f: 0.0 };
        match rotation {
            Rotation::Deg0 => None,
            Rotation::Deg90 => Some(Self { b: height / width, c: -width / height, e: width, ..zero }),
            Rotation::Deg180 => Some(Self { a: -1.0, d: -1.0, e: width, f: height, ..zero }),
            Rotation::Deg270 => Some(Self { b: -height / width, c: width / height, f: height, ..zero }),
        }
    }
}

/// One SVG transform function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Matrix(Matrix),
    Scale { sx: f64, sy: f64 },
    Translate { tx: f64, ty: f64 },
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(m) => write!(
                f,
                "matrix({} {} {} {} {} {})",
                fmt_number(m.a),
                fmt_number(m.b),
                fmt_number(m.c),
                fmt_number(m.d),
                fmt_display(m.e),
                fmt_display(m.f)
            ),
            Self::Scale { sx, sy } => write!(f, "scale({} {})", fmt_number(*sx), fmt_number(*sy)),
            Self::Translate { tx, ty } => write!(f, "translate({} {})", fmt_display(*tx), fmt_display(*ty)),
        }
    }
}

/// Ordered chain of transform ops. The empty chain is the identity.
///
/// Serializes as the SVG attribute string, or `null` for the identity so the
/// render layer drops the attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// The rotation re-orientation for a `width × height` box.
    #[must_use]
    pub fn rotation(rotation: Rotation, width: f64, height: f64) -> Self {
        Self { ops: Matrix::for_rotation(rotation, width, height).map(TransformOp::Matrix).into_iter().collect() }
    }

    /// Append a `scale(sx sy)`.
    #[must_use]
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        self.ops.push(TransformOp::Scale { sx, sy });
        self
    }

    /// Append a `translate(tx ty)`.
    #[must_use]
    pub fn translate(mut self, tx: f64, ty: f64) -> Self {
        self.ops.push(TransformOp::Translate { tx, ty });
        self
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// The leading rotation matrix, if the chain has one.
    #[must_use]
    pub fn matrix(&self) -> Option<Matrix> {
        match self.ops.first() {
            Some(TransformOp::Matrix(m)) => Some(*m),
            _ => None,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_identity() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}
