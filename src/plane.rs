//! Half-space boundary planes.

use crate::errors::BrushError;
use crate::float_types::{Real, is_zero_approx};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A bounding plane of a brush.
///
/// Points with `normal · p <= w` are inside the half-space, points with
/// `normal · p > w` are over it. The zero plane (zero normal, `w == 0`) is the
/// value new faces start with: it intersects nothing and excludes nothing.
///
/// Deserialized planes get their normal normalized, the same as
/// [`Plane::from_normal`]. Code building a `Plane` literal must pass a unit
/// (or zero) normal itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlane")]
pub struct Plane {
    /// Unit normal vector of the plane, pointing out of the brush
    pub normal: Vector3<Real>,
    /// Distance from origin along normal (plane equation: n·p = w)
    pub w: Real,
}

/// A plane as stored, before its normal is checked.
#[derive(Deserialize)]
struct RawPlane {
    normal: Vector3<Real>,
    w: Real,
}

impl TryFrom<RawPlane> for Plane {
    type Error = BrushError;

    fn try_from(raw: RawPlane) -> Result<Self, Self::Error> {
        if !raw.w.is_finite() || raw.normal.iter().any(|c| !c.is_finite()) {
            return Err(BrushError::invalid_plane(raw.normal.into(), raw.w));
        }
        Ok(Plane::from_normal(raw.normal, raw.w))
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::zero()
    }
}

impl Plane {
    /// The zero plane.
    pub fn zero() -> Self {
        Plane {
            normal: Vector3::zeros(),
            w: 0.0,
        }
    }

    /// Create a new plane from normal vector and distance.
    ///
    /// The normal is normalized. A zero-length normal yields the zero plane with
    /// the given distance.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        let normal = normal.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros);
        Plane { normal, w }
    }

    /// Like [`Plane::from_normal`] but rejects zero-length or non-finite input.
    pub fn try_from_normal(normal: Vector3<Real>, w: Real) -> Result<Self, BrushError> {
        if !w.is_finite() || normal.iter().any(|c| !c.is_finite()) {
            return Err(BrushError::invalid_plane(normal.into(), w));
        }
        match normal.try_normalize(Real::EPSILON) {
            Some(normal) => Ok(Plane { normal, w }),
            None => Err(BrushError::invalid_plane(normal.into(), w)),
        }
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Same normal, new distance.
    pub const fn with_offset(&self, w: Real) -> Self {
        Plane {
            normal: self.normal,
            w,
        }
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// `true` for the zero plane and for anything whose normal has collapsed.
    pub fn is_degenerate(&self) -> bool {
        self.normal.norm_squared() < Real::EPSILON
    }

    /// Signed distance of `point` from the plane, positive on the outside.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// `true` when `point` lies further than `eps` on the outward side.
    #[inline]
    pub fn is_point_over(&self, point: &Point3<Real>, eps: Real) -> bool {
        self.signed_distance(point) > eps
    }

    /// The single point shared by `self`, `b` and `c`.
    ///
    /// Solves the 3×3 system by Cramer's rule on the normals:
    /// ```text
    /// p = (w₀ (n₁ × n₂) + w₁ (n₂ × n₀) + w₂ (n₀ × n₁)) / (n₀ · (n₁ × n₂))
    /// ```
    /// Returns `None` when the determinant is within `eps` of zero, i.e. when
    /// two of the planes are parallel or coincident, or all three share a line.
    pub fn intersect_3(&self, b: &Plane, c: &Plane, eps: Real) -> Option<Point3<Real>> {
        let n0 = self.normal;
        let n1 = b.normal;
        let n2 = c.normal;

        let n1_x_n2 = n1.cross(&n2);
        let denom = n0.dot(&n1_x_n2);
        if is_zero_approx(denom, eps) {
            return None;
        }

        let p = (n1_x_n2 * self.w + n2.cross(&n0) * b.w + n0.cross(&n1) * c.w) / denom;
        if p.iter().all(|x| x.is_finite()) {
            Some(Point3::from(p))
        } else {
            None
        }
    }
}
