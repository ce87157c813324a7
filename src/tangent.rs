//! Axis-aligned texture projection bases.
//!
//! Each face is textured by projecting onto the cardinal plane it most closely
//! faces. The six candidates are fixed, so nearly axis-aligned faces keep the
//! same basis while they are being dragged around.

use crate::float_types::Real;
use nalgebra::{Point3, Vector2, Vector3};

/// `(primary, u, v)` per cardinal direction, in selection order.
/// Ties between candidates go to the earlier entry.
const CARDINAL_AXES: [[[Real; 3]; 3]; 6] = [
    [[0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, -1.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
    [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
];

/// Texture projection axes of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentBasis {
    /// Horizontal texture axis
    pub u: Vector3<Real>,
    /// Vertical texture axis
    pub v: Vector3<Real>,
    /// Cardinal direction the face was matched to
    pub axis: Vector3<Real>,
}

impl Default for TangentBasis {
    fn default() -> Self {
        Self::from_normal(&Vector3::zeros())
    }
}

impl TangentBasis {
    /// Pick the cardinal projection whose primary axis has the largest dot
    /// product with `normal`.
    pub fn from_normal(normal: &Vector3<Real>) -> Self {
        let mut best = &CARDINAL_AXES[0];
        let mut best_dot: Real = -1.0;

        for candidate in &CARDINAL_AXES {
            let dot = normal.dot(&Vector3::from(candidate[0]));
            if dot > best_dot {
                best_dot = dot;
                best = candidate;
            }
        }

        TangentBasis {
            u: Vector3::from(best[1]),
            v: Vector3::from(best[2]),
            axis: Vector3::from(best[0]),
        }
    }

    /// Raw (unscaled, untransformed) texture coordinate of `point`.
    #[inline]
    pub fn project(&self, point: &Point3<Real>) -> Vector2<Real> {
        Vector2::new(self.u.dot(&point.coords), self.v.dot(&point.coords))
    }

    /// The `u` axis with its component along `normal` removed, normalized.
    ///
    /// `None` only if `u` is parallel to `normal`, which cannot happen for a
    /// basis chosen from that same non-zero normal.
    pub fn u_in_plane(&self, normal: &Vector3<Real>) -> Option<Vector3<Real>> {
        let u = self.u - normal * normal.dot(&self.u);
        u.try_normalize(Real::EPSILON)
    }
}
