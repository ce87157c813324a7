//! Struct and functions for working with `Vertex`s from which face polygons are composed.

use crate::float_types::{Real, approx_eq};
use nalgebra::{Point3, Vector2, Vector3};

/// A vertex of a brush face, holding position, normal and texture coordinate.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Vector2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in brush space
    /// * `normal` – copied verbatim; faces hand in their plane normal
    /// * `uv`     – texture coordinate, already scaled for texel density
    ///
    /// Non-finite components are replaced with zero.
    #[inline]
    pub fn new(mut pos: Point3<Real>, mut normal: Vector3<Real>, mut uv: Vector2<Real>) -> Self {
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }
        for c in normal.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }
        for c in uv.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        Vertex { pos, normal, uv }
    }

    /// `true` when the two positions agree on every coordinate within `eps`
    /// (relative to the coordinate's magnitude, see [`approx_eq`]).
    pub fn coincides_with(&self, other: &Point3<Real>, eps: Real) -> bool {
        points_coincide(&self.pos, other, eps)
    }
}

/// Per-coordinate approximate equality of two positions.
#[inline]
pub fn points_coincide(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}
